//! Time-window filtering and reshaping of raw observations.
//!
//! Everything here is a pure function of its arguments. `now` is always passed
//! in so that windowing is deterministic.

use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

use crate::domain::Observation;
use crate::utils::TimeUtils;

/// One row of the wide (timestamp x symbol) chart table.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub timestamp: DateTime<Utc>,
    /// `None` marks a symbol with no observation at exactly this timestamp.
    pub cells: BTreeMap<String, Option<f64>>,
}

impl WideRow {
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.cells.get(symbol).copied().flatten()
    }
}

/// Keep every observation with `timestamp >= now - window_minutes`, in the
/// original relative order.
pub fn window_series(
    observations: &[Observation],
    window_minutes: u32,
    now: DateTime<Utc>,
) -> Vec<Observation> {
    let threshold = TimeUtils::window_start(now, window_minutes);
    observations
        .iter()
        .filter(|obs| obs.timestamp >= threshold)
        .cloned()
        .collect()
}

/// Same as [`window_series`] but yields only the prices, which is all the
/// correlation code needs.
pub fn windowed_prices(
    observations: &[Observation],
    window_minutes: u32,
    now: DateTime<Utc>,
) -> Vec<f64> {
    let threshold = TimeUtils::window_start(now, window_minutes);
    observations
        .iter()
        .filter(|obs| obs.timestamp >= threshold)
        .map(|obs| obs.price)
        .collect()
}

/// Partition a flat snapshot into one ascending series per symbol.
/// The sort is stable so same-instant observations keep their arrival order.
pub fn group_by_symbol(observations: &[Observation]) -> BTreeMap<String, Vec<Observation>> {
    let mut grouped: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
    for obs in observations {
        grouped
            .entry(obs.symbol.clone())
            .or_default()
            .push(obs.clone());
    }
    for series in grouped.values_mut() {
        series.sort_by_key(|obs| obs.timestamp);
    }
    grouped
}

/// Window every series independently. Symbols whose window is empty keep
/// their (empty) entry so callers still see the full symbol set.
pub fn window_by_symbol(
    series_by_symbol: &BTreeMap<String, Vec<Observation>>,
    window_minutes: u32,
    now: DateTime<Utc>,
) -> BTreeMap<String, Vec<Observation>> {
    series_by_symbol
        .iter()
        .map(|(symbol, series)| {
            (
                symbol.clone(),
                window_series(series, window_minutes, now),
            )
        })
        .collect()
}

/// One row per distinct timestamp (ascending), one cell per symbol key.
///
/// Missing cells are `None`; nothing is interpolated. When a symbol has several
/// observations at the same instant the last one in sequence order wins.
pub fn build_wide_table(series_by_symbol: &BTreeMap<String, Vec<Observation>>) -> Vec<WideRow> {
    // Reindex each series by timestamp up front instead of scanning per cell.
    let lookup: BTreeMap<&str, HashMap<DateTime<Utc>, f64>> = series_by_symbol
        .iter()
        .map(|(symbol, series)| {
            let by_ts: HashMap<DateTime<Utc>, f64> =
                series.iter().map(|obs| (obs.timestamp, obs.price)).collect();
            (symbol.as_str(), by_ts)
        })
        .collect();

    series_by_symbol
        .values()
        .flatten()
        .map(|obs| obs.timestamp)
        .sorted()
        .dedup()
        .map(|timestamp| {
            let cells = lookup
                .iter()
                .map(|(symbol, by_ts)| (symbol.to_string(), by_ts.get(&timestamp).copied()))
                .collect();
            WideRow { timestamp, cells }
        })
        .collect()
}

/// Newest observation per symbol, sorted by symbol.
/// Only a strictly newer timestamp replaces the current pick.
pub fn latest_by_symbol(observations: &[Observation]) -> Vec<Observation> {
    let mut latest: BTreeMap<&str, &Observation> = BTreeMap::new();
    for obs in observations {
        match latest.get(obs.symbol.as_str()) {
            Some(current) if obs.timestamp <= current.timestamp => {}
            _ => {
                latest.insert(obs.symbol.as_str(), obs);
            }
        }
    }
    latest.into_values().cloned().collect()
}
