//! Pairwise Pearson correlation over windowed price series.
//!
//! Degenerate inputs (no overlap, constant series) yield `0.0`. Nothing in
//! here returns an error or produces NaN for finite input.

use chrono::{DateTime, Utc};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

use crate::analysis::series_aligner::{window_series, windowed_prices};
use crate::domain::Observation;
use crate::utils::maths_utils::clamp_unit;

/// How two symbols' series are paired up before correlating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairAlignment {
    /// Pair the i-th price of each series, truncated to the shorter length.
    #[default]
    Truncate,
    /// Pair only prices observed at the exact same instant.
    TimestampJoin,
}

/// Presentation bucket for a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    SelfPair,
    /// Exactly zero, which is what degenerate pairs report.
    NoSignal,
    Positive,
    Negative,
}

impl CellKind {
    pub fn classify(row: &str, col: &str, value: f64) -> Self {
        if row == col {
            CellKind::SelfPair
        } else if value > 0.0 {
            CellKind::Positive
        } else if value < 0.0 {
            CellKind::Negative
        } else {
            CellKind::NoSignal
        }
    }
}

/// Symmetric symbol x symbol matrix of coefficients. Diagonal is always 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrelationMatrix {
    cells: BTreeMap<String, BTreeMap<String, f64>>,
}

impl CorrelationMatrix {
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.cells.get(a).and_then(|row| row.get(b)).copied()
    }

    pub fn row(&self, symbol: &str) -> Option<&BTreeMap<String, f64>> {
        self.cells.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn set_pair(&mut self, a: &str, b: &str, value: f64) {
        self.cells
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), value);
        self.cells
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), value);
    }
}

/// Pearson correlation of `x` and `y` over their common prefix.
///
/// Sequences are truncated to `min(len)`, not aligned by any key. Returns 0
/// for an empty prefix and whenever either prefix has zero variance (which
/// includes the single-point case).
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    use statrs::statistics::Statistics;

    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);

    let x_mean = x.iter().mean();
    let y_mean = y.iter().mean();

    let mut covariance = 0.0;
    let mut x_variance = 0.0;
    let mut y_variance = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let x_diff = xi - x_mean;
        let y_diff = yi - y_mean;
        covariance += x_diff * y_diff;
        x_variance += x_diff * x_diff;
        y_variance += y_diff * y_diff;
    }

    if x_variance == 0.0 || y_variance == 0.0 {
        return 0.0;
    }
    clamp_unit(covariance / (x_variance * y_variance).sqrt())
}

/// Pearson over the prices two series share an exact timestamp for.
/// Within one series the last observation at an instant wins.
pub fn pearson_joined(a: &[Observation], b: &[Observation]) -> f64 {
    let b_by_ts: HashMap<DateTime<Utc>, f64> =
        b.iter().map(|obs| (obs.timestamp, obs.price)).collect();
    let a_by_ts: BTreeMap<DateTime<Utc>, f64> =
        a.iter().map(|obs| (obs.timestamp, obs.price)).collect();

    let (xs, ys): (Vec<f64>, Vec<f64>) = a_by_ts
        .iter()
        .filter_map(|(ts, price)| b_by_ts.get(ts).map(|other| (*price, *other)))
        .unzip();
    pearson(&xs, &ys)
}

/// Full correlation matrix with the default truncating alignment.
pub fn build_matrix(
    series_by_symbol: &BTreeMap<String, Vec<Observation>>,
    window_minutes: u32,
    now: DateTime<Utc>,
) -> CorrelationMatrix {
    build_matrix_with(series_by_symbol, window_minutes, now, PairAlignment::Truncate)
}

/// Full correlation matrix over every symbol pair.
///
/// Each series is windowed independently with the same `window_minutes` and
/// `now`. Self-pairs are 1 whatever the data. Each unordered pair is computed
/// once and mirrored, which gives the same result as evaluating both orders.
pub fn build_matrix_with(
    series_by_symbol: &BTreeMap<String, Vec<Observation>>,
    window_minutes: u32,
    now: DateTime<Utc>,
    alignment: PairAlignment,
) -> CorrelationMatrix {
    let symbols: Vec<&str> = series_by_symbol.keys().map(String::as_str).collect();

    let pair_values: Vec<(&str, &str, f64)> = match alignment {
        PairAlignment::Truncate => {
            let prices: HashMap<&str, Vec<f64>> = series_by_symbol
                .iter()
                .map(|(symbol, series)| {
                    (symbol.as_str(), windowed_prices(series, window_minutes, now))
                })
                .collect();
            let pairs: Vec<(&str, &str)> = symbols.iter().copied().tuple_combinations().collect();
            pairs
                .into_par_iter()
                .map(|(a, b)| (a, b, pearson(&prices[a], &prices[b])))
                .collect()
        }
        PairAlignment::TimestampJoin => {
            let windowed: HashMap<&str, Vec<Observation>> = series_by_symbol
                .iter()
                .map(|(symbol, series)| {
                    (symbol.as_str(), window_series(series, window_minutes, now))
                })
                .collect();
            let pairs: Vec<(&str, &str)> = symbols.iter().copied().tuple_combinations().collect();
            pairs
                .into_par_iter()
                .map(|(a, b)| (a, b, pearson_joined(&windowed[a], &windowed[b])))
                .collect()
        }
    };

    let mut matrix = CorrelationMatrix::default();
    for symbol in &symbols {
        matrix.set_pair(symbol, symbol, 1.0);
    }
    for (a, b, value) in pair_values {
        matrix.set_pair(a, b, value);
    }

    #[cfg(debug_assertions)]
    if crate::config::DEBUG_FLAGS.print_matrix_builds {
        log::info!(
            "Correlation matrix: {} symbols, {}m window, {:?}",
            matrix.len(),
            window_minutes,
            alignment
        );
    }

    matrix
}
