use eframe::egui::{self, Color32};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, PlotUi};

use crate::analysis::WideRow;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::Observation;
use crate::models::ChartData;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::time_utils::epoch_secs_to_local_clock;

/// Split one symbol's column into runs of consecutive present cells.
/// Gaps are left as gaps: no line is drawn across a missing timestamp.
pub fn contiguous_runs(rows: &[WideRow], symbol: &str) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for row in rows {
        match row.get(symbol) {
            Some(price) => current.push([row.timestamp.timestamp_millis() as f64 / 1000.0, price]),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

pub fn series_color(index: usize) -> Color32 {
    PLOT_CONFIG.series_palette[index % PLOT_CONFIG.series_palette.len()]
}

fn price_points(points: &[Observation]) -> Vec<[f64; 2]> {
    points.iter().map(|obs| [obs.epoch_secs(), obs.price]).collect()
}

fn change_points(points: &[Observation]) -> Vec<[f64; 2]> {
    points.iter().map(|obs| [obs.epoch_secs(), obs.change]).collect()
}

/// Line chart for either a single symbol or the whole wide table.
pub fn show_chart(ui: &mut egui::Ui, chart: &ChartData) {
    Plot::new("price_chart")
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_formatter(|mark, _range| epoch_secs_to_local_clock(mark.value))
        .label_formatter(|name, value| {
            let clock = epoch_secs_to_local_clock(value.x);
            if name.is_empty() {
                format!("{}\n{:.2}", clock, value.y)
            } else {
                format!("{}\n{}\n{:.2}", name, clock, value.y)
            }
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| match chart {
            ChartData::Single { points, .. } => render_single(plot_ui, points),
            ChartData::Multi { symbols, rows } => render_multi(plot_ui, symbols, rows),
        });
}

fn render_single(plot_ui: &mut PlotUi, points: &[Observation]) {
    plot_ui.line(
        Line::new(UI_TEXT.price_series, PlotPoints::new(price_points(points)))
            .color(PLOT_CONFIG.price_line_color)
            .width(PLOT_CONFIG.line_width),
    );
    plot_ui.line(
        Line::new(UI_TEXT.change_series, PlotPoints::new(change_points(points)))
            .color(PLOT_CONFIG.change_line_color)
            .width(PLOT_CONFIG.line_width),
    );
}

fn render_multi(plot_ui: &mut PlotUi, symbols: &[String], rows: &[WideRow]) {
    for (index, symbol) in symbols.iter().enumerate() {
        let color = series_color(index);
        // Same name for every run keeps one legend entry per symbol
        for run in contiguous_runs(rows, symbol) {
            plot_ui.line(
                Line::new(symbol.as_str(), PlotPoints::new(run))
                    .color(color)
                    .width(PLOT_CONFIG.line_width),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::collections::BTreeMap;

    fn row(minute: i64, cells: &[(&str, Option<f64>)]) -> WideRow {
        let t0: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        WideRow {
            timestamp: t0 + Duration::minutes(minute),
            cells: cells
                .iter()
                .map(|(s, v)| (s.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn gaps_split_lines_instead_of_bridging() {
        let rows = vec![
            row(0, &[("A", Some(1.0))]),
            row(1, &[("A", Some(2.0))]),
            row(2, &[("A", None)]),
            row(3, &[("A", Some(4.0))]),
        ];
        let runs = contiguous_runs(&rows, "A");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1][0][1], 4.0);
        assert!((runs[1][0][0] - runs[0][0][0] - 180.0).abs() < 1e-9);
    }

    #[test]
    fn absent_symbol_has_no_runs() {
        let rows = vec![row(0, &[("A", Some(1.0))])];
        assert!(contiguous_runs(&rows, "B").is_empty());
        assert!(contiguous_runs(&[], "A").is_empty());
    }

    #[test]
    fn palette_cycles() {
        let n = PLOT_CONFIG.series_palette.len();
        assert_eq!(series_color(0), series_color(n));
    }
}
