use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub price_up: Color32,
    pub price_down: Color32,
    pub price_flat: Color32,
    pub status_ok: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    pub watchlist_max_height: f32,
    /// Upper bound between repaints when nothing else wakes the UI
    pub idle_repaint_ms: u64,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        price_up: Color32::from_rgb(100, 200, 100),
        price_down: Color32::from_rgb(255, 100, 100),
        price_flat: Color32::GRAY,
        status_ok: Color32::from_rgb(100, 200, 255),
    },
    side_panel_min_width: 220.0,
    watchlist_max_height: 420.0,
    idle_repaint_ms: 1000,
};
