use eframe::{Frame, egui};
use std::time::Duration;
use strum::IntoEnumIterator;

use crate::analysis::PairAlignment;
use crate::domain::TimeFrame;
use crate::engine::DashboardEngine;
use crate::models::ViewConfig;
use crate::ui::config::UI_CONFIG;
use crate::ui::ui_heatmap::HeatPalette;
use crate::ui::ui_panels::{ControlsEvent, WatchlistEvent};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct DashboardApp {
    pub(super) engine: DashboardEngine,
    /// The UI's own copy; the engine rebuilds whenever it differs from the model's
    pub(super) view: ViewConfig,
    pub(super) palette: HeatPalette,
    pub(super) show_help: bool,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, engine: DashboardEngine, view: ViewConfig) -> Self {
        Self {
            engine,
            view,
            palette: HeatPalette::new(),
            show_help: false,
        }
    }

    pub(super) fn apply_watchlist_event(&mut self, event: WatchlistEvent) {
        match event {
            WatchlistEvent::Select(symbol) => {
                self.view.selected_symbol = symbol;
                // Picking a symbol from the list means the user wants to see it
                self.view.show_all = false;
            }
            WatchlistEvent::Search(query) => self.view.search = query,
        }
    }

    pub(super) fn apply_controls_event(&mut self, event: ControlsEvent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("View control: {:?}", event);
        }
        match event {
            ControlsEvent::TimeFrame(time_frame) => self.view.time_frame = time_frame,
            ControlsEvent::ShowAll(show_all) => self.view.show_all = show_all,
            ControlsEvent::Alignment(alignment) => self.view.alignment = alignment,
        }
    }

    pub(super) fn cycle_time_frame(&mut self) {
        self.view.time_frame = next_time_frame(self.view.time_frame);
    }

    pub(super) fn toggle_alignment(&mut self) {
        self.view.alignment = match self.view.alignment {
            PairAlignment::Truncate => PairAlignment::TimestampJoin,
            PairAlignment::TimestampJoin => PairAlignment::Truncate,
        };
    }
}

pub(super) fn next_time_frame(current: TimeFrame) -> TimeFrame {
    TimeFrame::iter()
        .cycle()
        .skip_while(|option| *option != current)
        .nth(1)
        .unwrap_or_default()
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let busy = self.engine.update(&self.view);
        let model = self.engine.model();

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx, model.as_deref());
        self.render_status_panel(ctx, busy);
        self.render_central_panel(ctx, model.as_deref());
        if self.show_help {
            self.render_help_panel(ctx);
        }

        // Keep waking up: builds finish and polls land without any input event
        if busy {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.idle_repaint_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_frame_cycles_through_all_options() {
        assert_eq!(next_time_frame(TimeFrame::OneMinute), TimeFrame::FiveMinutes);
        assert_eq!(next_time_frame(TimeFrame::FiveMinutes), TimeFrame::FifteenMinutes);
        assert_eq!(next_time_frame(TimeFrame::ThirtyMinutes), TimeFrame::OneMinute);
    }
}
