//! Chart and heatmap visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Cycled through for one line per symbol in the all-symbols chart
    pub series_palette: &'static [Color32],
    pub price_line_color: Color32,
    pub change_line_color: Color32,
    pub line_width: f32,
    pub chart_height: f32,
    /// Heatmap gradient from -1 (first) through 0 to +1 (last)
    pub heatmap_gradient_colors: &'static [&'static str],
    /// Alpha floor so weak correlations are still faintly visible
    pub heatmap_min_alpha: f32,
    pub heatmap_self_color: Color32,
    pub heatmap_no_signal_color: Color32,
    pub heatmap_text_color: Color32,
    pub heatmap_cell_size: f32,
    pub heatmap_cell_spacing: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    series_palette: &[
        Color32::from_rgb(0x88, 0x84, 0xd8),
        Color32::from_rgb(0x82, 0xca, 0x9d),
        Color32::from_rgb(0xff, 0x73, 0x00),
        Color32::from_rgb(0x00, 0x88, 0xfe),
        Color32::from_rgb(0x00, 0xc4, 0x9f),
        Color32::from_rgb(0xff, 0xbb, 0x28),
        Color32::from_rgb(0xff, 0x80, 0x42),
        Color32::from_rgb(0xa2, 0x8f, 0xd0),
        Color32::from_rgb(0xff, 0x6f, 0x91),
        Color32::from_rgb(0x6a, 0x4c, 0x93),
    ],
    price_line_color: Color32::from_rgb(0x88, 0x84, 0xd8),
    change_line_color: Color32::from_rgb(0x82, 0xca, 0x9d),
    line_width: 1.5,
    chart_height: 350.0,
    heatmap_gradient_colors: &[
        "#ff0000", // Strong negative
        "#ffffff", // None
        "#00ff00", // Strong positive
    ],
    heatmap_min_alpha: 0.08,
    heatmap_self_color: Color32::from_rgb(124, 112, 228), // Brand violet
    heatmap_no_signal_color: Color32::from_rgb(90, 90, 90),
    heatmap_text_color: Color32::BLACK,
    heatmap_cell_size: 60.0,
    heatmap_cell_spacing: 2.0,
};
