//! Everything one frame of the dashboard needs, computed from a snapshot and a view.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::analysis::{
    CorrelationMatrix, WideRow, build_matrix_with, build_wide_table, latest_by_symbol,
    window_by_symbol, window_series,
};
use crate::data::QuoteSnapshot;
use crate::domain::Observation;
use crate::models::view::{ViewConfig, WatchlistEntry, filter_watchlist};

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Price and change of one symbol over the window
    Single { symbol: String, points: Vec<Observation> },
    /// One price column per symbol over the window
    Multi { symbols: Vec<String>, rows: Vec<WideRow> },
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Single { points, .. } => points.is_empty(),
            ChartData::Multi { rows, .. } => rows.is_empty(),
        }
    }
}

/// Immutable result of one recompute. Shared with the UI behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub generation: u64,
    pub source: &'static str,
    pub view: ViewConfig,
    pub built_at: DateTime<Utc>,
    /// Symbol actually shown (the requested one may be missing from the feed)
    pub selected: Option<String>,
    pub selected_quote: Option<Observation>,
    pub watchlist: Vec<WatchlistEntry>,
    pub chart: ChartData,
    pub heatmap: CorrelationMatrix,
}

impl DashboardModel {
    pub fn build(snapshot: &QuoteSnapshot, view: &ViewConfig, now: DateTime<Utc>) -> Self {
        let by_symbol = snapshot.by_symbol();
        let latest = latest_by_symbol(&snapshot.observations);
        let selected = view.resolve_selected(by_symbol.keys().map(String::as_str));
        let minutes = view.window_minutes();

        let chart = if view.show_all {
            let windowed = window_by_symbol(&by_symbol, minutes, now);
            ChartData::Multi {
                symbols: windowed.keys().cloned().collect(),
                rows: build_wide_table(&windowed),
            }
        } else {
            let symbol = selected.clone().unwrap_or_else(|| view.selected_symbol.clone());
            let points = by_symbol
                .get(&symbol)
                .map(|series| window_series(series, minutes, now))
                .unwrap_or_default();
            ChartData::Single { symbol, points }
        };

        let heatmap = if view.show_all {
            build_matrix_with(&by_symbol, minutes, now, view.alignment)
        } else {
            let only_selected: BTreeMap<String, Vec<Observation>> = by_symbol
                .into_iter()
                .filter(|(symbol, _)| Some(symbol) == selected.as_ref())
                .collect();
            build_matrix_with(&only_selected, minutes, now, view.alignment)
        };

        let selected_quote = selected
            .as_ref()
            .and_then(|symbol| latest.iter().find(|obs| &obs.symbol == symbol).cloned());

        Self {
            generation: snapshot.generation,
            source: snapshot.source,
            view: view.clone(),
            built_at: now,
            selected,
            selected_quote,
            watchlist: filter_watchlist(&latest, &view.search),
            chart,
            heatmap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::maths_utils::approx_eq;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap()
    }

    fn snapshot() -> QuoteSnapshot {
        let mut observations = Vec::new();
        for minute in 0..10 {
            let ts = t0() + Duration::minutes(minute);
            observations.push(Observation::new("AAPL", 100.0 + minute as f64, 1.0, ts));
            observations.push(Observation::new("MSFT", 200.0 - minute as f64, -1.0, ts));
        }
        QuoteSnapshot::new(7, observations, "test")
    }

    fn now() -> DateTime<Utc> {
        t0() + Duration::minutes(9)
    }

    #[test]
    fn all_view_builds_wide_table_and_full_heatmap() {
        let model = DashboardModel::build(&snapshot(), &ViewConfig::default(), now());

        assert_eq!(model.generation, 7);
        match &model.chart {
            ChartData::Multi { symbols, rows } => {
                assert_eq!(symbols, &vec!["AAPL".to_string(), "MSFT".to_string()]);
                // minutes 4..=9 fall in the 5 minute window
                assert_eq!(rows.len(), 6);
            }
            other => panic!("expected multi chart, got {:?}", other),
        }
        assert_eq!(model.heatmap.len(), 2);
        let r = model.heatmap.get("AAPL", "MSFT").unwrap();
        assert!(approx_eq(r, -1.0, 1e-9));
        assert_eq!(model.watchlist.len(), 2);
        assert_eq!(model.selected_quote.as_ref().map(|q| q.price), Some(109.0));
    }

    #[test]
    fn single_view_restricts_chart_and_heatmap_to_selection() {
        let view = ViewConfig {
            selected_symbol: "MSFT".into(),
            show_all: false,
            ..Default::default()
        };
        let model = DashboardModel::build(&snapshot(), &view, now());

        match &model.chart {
            ChartData::Single { symbol, points } => {
                assert_eq!(symbol, "MSFT");
                assert_eq!(points.len(), 6);
            }
            other => panic!("expected single chart, got {:?}", other),
        }
        assert_eq!(model.heatmap.len(), 1);
        assert_eq!(model.heatmap.get("MSFT", "MSFT"), Some(1.0));
    }

    #[test]
    fn missing_selection_falls_back_and_search_filters_watchlist() {
        let view = ViewConfig {
            selected_symbol: "TSLA".into(),
            search: "micro".into(),
            ..Default::default()
        };
        let model = DashboardModel::build(&snapshot(), &view, now());

        assert_eq!(model.selected.as_deref(), Some("AAPL"));
        assert_eq!(model.watchlist.len(), 1);
        assert_eq!(model.watchlist[0].symbol, "MSFT");
    }

    #[test]
    fn stale_snapshot_yields_empty_chart_not_error() {
        let later = now() + Duration::hours(2);
        let model = DashboardModel::build(&snapshot(), &ViewConfig::default(), later);

        assert!(model.chart.is_empty());
        // Empty windows are degenerate, not missing
        assert_eq!(model.heatmap.get("AAPL", "MSFT"), Some(0.0));
        assert_eq!(model.heatmap.get("AAPL", "AAPL"), Some(1.0));
    }

    #[test]
    fn empty_snapshot_builds_empty_model() {
        let empty = QuoteSnapshot::new(1, Vec::new(), "test");
        let view = ViewConfig {
            show_all: false,
            ..Default::default()
        };
        let model = DashboardModel::build(&empty, &view, now());

        assert!(model.selected.is_none());
        assert!(model.chart.is_empty());
        assert!(model.heatmap.is_empty());
        assert!(model.watchlist.is_empty());
    }
}
