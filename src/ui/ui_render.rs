use eframe::egui::{CentralPanel, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui, Window};

use crate::config::company_name;
use crate::models::{ChartData, DashboardModel};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_chart::show_chart;
use crate::ui::ui_heatmap::show_heatmap;
use crate::ui::ui_panels::{ControlsPanel, Panel, WatchlistPanel, alignment_label};
use crate::ui::utils::{change_color, format_price, section_heading, spaced_separator};
use crate::utils::time_utils::{format_age, utc_to_local_stamp};

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context, model: Option<&DashboardModel>) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mut controls = ControlsPanel::new(
                    self.view.time_frame,
                    self.view.show_all,
                    self.view.alignment,
                );
                for event in controls.render(ui) {
                    self.apply_controls_event(event);
                }
                spaced_separator(ui);

                let watch_events = match model {
                    Some(model) => {
                        let mut panel = WatchlistPanel::new(
                            &model.watchlist,
                            model.selected.as_deref(),
                            &self.view.search,
                        );
                        panel.render(ui)
                    }
                    None => {
                        section_heading(ui, UI_TEXT.watchlist_heading);
                        ui.label_subdued(UI_TEXT.waiting_for_data);
                        Vec::new()
                    }
                };
                for event in watch_events {
                    self.apply_watchlist_event(event);
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context, model: Option<&DashboardModel>) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(10));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let Some(model) = model else {
                    ui.label_warning(UI_TEXT.waiting_for_data);
                    return;
                };

                ScrollArea::vertical().id_salt("central_scroll").show(ui, |ui| {
                    self.render_quote_header(ui, model);
                    ui.add_space(10.0);

                    let chart_heading = match &model.chart {
                        ChartData::Multi { .. } => UI_TEXT.chart_heading_all,
                        ChartData::Single { .. } => UI_TEXT.chart_heading_single,
                    };
                    section_heading(
                        ui,
                        format!("{} ({})", chart_heading, model.view.time_frame.label()),
                    );
                    if model.chart.is_empty() {
                        ui.label_subdued(UI_TEXT.no_data_for_window);
                    } else {
                        show_chart(ui, &model.chart);
                    }

                    spaced_separator(ui);
                    section_heading(ui, UI_TEXT.heatmap_heading);
                    ui.label_subdued(UI_TEXT.heatmap_legend);
                    ui.label_subdued(alignment_label(model.view.alignment));
                    ui.add_space(5.0);
                    if model.heatmap.is_empty() {
                        ui.label_subdued(UI_TEXT.no_data_for_window);
                    } else {
                        show_heatmap(ui, &model.heatmap, &self.palette);
                    }
                });
            });
    }

    fn render_quote_header(&self, ui: &mut Ui, model: &DashboardModel) {
        let Some(quote) = &model.selected_quote else {
            ui.label_header(UI_TEXT.app_title);
            return;
        };
        ui.horizontal(|ui| {
            ui.label_header(&quote.symbol);
            if let Some(company) = company_name(&quote.symbol) {
                ui.label_subheader(company);
            }
        });
        let arrow = if quote.is_up() {
            "▲"
        } else if quote.is_down() {
            "▼"
        } else {
            "•"
        };
        ui.horizontal(|ui| {
            ui.label(RichText::new(format_price(quote.price)).size(22.0).strong());
            ui.label(RichText::new(arrow).color(change_color(quote.change)));
            ui.label_change(quote.change, 16.0);
            ui.label_subdued(utc_to_local_stamp(quote.timestamp));
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context, busy: bool) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                let status = self.engine.feed_status();
                ui.horizontal(|ui| {
                    match self.engine.latest_snapshot() {
                        Some(snapshot) => {
                            ui.metric(UI_TEXT.status_source, snapshot.source, UI_CONFIG.colors.status_ok);
                            ui.separator();
                            ui.metric(UI_TEXT.status_age, &format_age(snapshot.age()), UI_CONFIG.colors.label);
                            ui.separator();
                            ui.metric("Gen", &snapshot.generation.to_string(), UI_CONFIG.colors.label);
                        }
                        None => ui.label_subdued(UI_TEXT.waiting_for_data),
                    }
                    ui.separator();
                    ui.metric(
                        UI_TEXT.status_polls,
                        &format!("{} ({} failed)", status.polls, status.failures),
                        UI_CONFIG.colors.label,
                    );
                    if busy {
                        ui.separator();
                        ui.label_subdued(UI_TEXT.building_model);
                    }
                    if let Some(error) = &status.last_error {
                        ui.separator();
                        ui.label_error(error.to_string());
                    }
                });
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                let shortcuts = [
                    ("H", "Toggle this help panel"),
                    ("A", "Toggle all symbols / selected symbol"),
                    ("T", "Next time frame"),
                    ("J", "Toggle heatmap pairing mode"),
                ];
                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Don't steal keystrokes from the search box
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
            if i.key_pressed(Key::A) {
                self.view.show_all = !self.view.show_all;
            }
            if i.key_pressed(Key::T) {
                self.cycle_time_frame();
            }
            if i.key_pressed(Key::J) {
                self.toggle_alignment();
            }
        });
    }
}
