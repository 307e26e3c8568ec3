use eframe::egui::{ComboBox, RichText, ScrollArea, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::analysis::PairAlignment;
use crate::domain::TimeFrame;
use crate::models::WatchlistEntry;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, format_price, section_heading};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Searchable list of the latest quote per symbol
pub struct WatchlistPanel<'a> {
    entries: &'a [WatchlistEntry],
    selected: Option<&'a str>,
    search: String,
}

impl<'a> WatchlistPanel<'a> {
    pub fn new(entries: &'a [WatchlistEntry], selected: Option<&'a str>, search: &str) -> Self {
        Self {
            entries,
            selected,
            search: search.to_string(),
        }
    }

    fn render_search_box(&mut self, ui: &mut Ui) -> Option<String> {
        let response = ui.add(
            TextEdit::singleline(&mut self.search)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(f32::INFINITY),
        );
        response.changed().then(|| self.search.clone())
    }

    fn render_entry(&self, ui: &mut Ui, entry: &WatchlistEntry) -> bool {
        let is_selected = self.selected == Some(entry.symbol.as_str());
        let mut clicked = false;
        ui.horizontal(|ui| {
            let label = RichText::new(&entry.symbol).monospace().strong();
            if ui
                .selectable_label(is_selected, label)
                .on_hover_text(entry.display_name())
                .clicked()
            {
                clicked = true;
            }
            ui.label(format_price(entry.price));
            ui.label_change(entry.change, 11.0);
        });
        if let Some(company) = entry.company {
            ui.label_subdued(company);
        }
        clicked
    }
}

#[derive(Debug)]
pub enum WatchlistEvent {
    Select(String),
    Search(String),
}

impl<'a> Panel for WatchlistPanel<'a> {
    type Event = WatchlistEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.watchlist_heading);

        if let Some(query) = self.render_search_box(ui) {
            events.push(WatchlistEvent::Search(query));
        }
        ui.add_space(5.0);

        if self.entries.is_empty() {
            ui.label_subdued(UI_TEXT.no_matches);
            return events;
        }

        ScrollArea::vertical()
            .max_height(UI_CONFIG.watchlist_max_height)
            .id_salt("watchlist")
            .show(ui, |ui| {
                for entry in self.entries {
                    if self.render_entry(ui, entry) {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Watchlist selection: {}", entry.symbol);
                        }
                        events.push(WatchlistEvent::Select(entry.symbol.clone()));
                    }
                    ui.add_space(3.0);
                }
            });
        events
    }
}

/// Time frame, single/all toggle and heatmap pairing mode
pub struct ControlsPanel {
    time_frame: TimeFrame,
    show_all: bool,
    alignment: PairAlignment,
}

impl ControlsPanel {
    pub fn new(time_frame: TimeFrame, show_all: bool, alignment: PairAlignment) -> Self {
        Self {
            time_frame,
            show_all,
            alignment,
        }
    }
}

#[derive(Debug)]
pub enum ControlsEvent {
    TimeFrame(TimeFrame),
    ShowAll(bool),
    Alignment(PairAlignment),
}

pub fn alignment_label(alignment: PairAlignment) -> &'static str {
    match alignment {
        PairAlignment::Truncate => UI_TEXT.alignment_truncate,
        PairAlignment::TimestampJoin => UI_TEXT.alignment_join,
    }
}

impl Panel for ControlsPanel {
    type Event = ControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        ui.label(colored_subsection_heading(UI_TEXT.time_frame_label));
        ui.horizontal(|ui| {
            for option in TimeFrame::iter() {
                if ui
                    .selectable_value(&mut self.time_frame, option, option.label())
                    .clicked()
                {
                    events.push(ControlsEvent::TimeFrame(option));
                }
            }
        });
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui
                .selectable_value(&mut self.show_all, true, UI_TEXT.show_all_label)
                .clicked()
            {
                events.push(ControlsEvent::ShowAll(true));
            }
            if ui
                .selectable_value(&mut self.show_all, false, UI_TEXT.show_single_label)
                .clicked()
            {
                events.push(ControlsEvent::ShowAll(false));
            }
        });
        ui.add_space(5.0);

        ui.label(colored_subsection_heading(UI_TEXT.alignment_label));
        ComboBox::from_id_salt("pair_alignment")
            .selected_text(alignment_label(self.alignment))
            .show_ui(ui, |ui| {
                for option in [PairAlignment::Truncate, PairAlignment::TimestampJoin] {
                    if ui
                        .selectable_value(&mut self.alignment, option, alignment_label(option))
                        .clicked()
                    {
                        events.push(ControlsEvent::Alignment(option));
                    }
                }
            });

        ui.add_space(10.0);
        events
    }
}
