use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped quote sample for a symbol.
///
/// `change` is the delta from the previous observation of the same symbol and
/// carries no invariant beyond being a signed real.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Observation {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    /// Parsed from an RFC 3339 string on the wire
    pub timestamp: DateTime<Utc>,
}

impl Observation {
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        change: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            change,
            timestamp,
        }
    }

    /// Timestamp as fractional seconds since the epoch (plot x-axis units).
    pub fn epoch_secs(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64 / 1000.0
    }

    pub fn is_up(&self) -> bool {
        self.change > 0.0
    }

    pub fn is_down(&self) -> bool {
        self.change < 0.0
    }
}
