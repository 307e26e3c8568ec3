use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::analysis::group_by_symbol;
use crate::domain::Observation;
use crate::utils::app_time::{AppInstant, now};

/// One complete poll result. Replaced wholesale on every successful poll.
#[derive(Debug, Clone)]
pub struct QuoteSnapshot {
    /// Monotonically increasing per publishing slot
    pub generation: u64,
    pub observations: Vec<Observation>,
    /// Signature of the provider that produced the data
    pub source: &'static str,
    pub fetched_at: DateTime<Utc>,
    pub received_at: AppInstant,
}

impl QuoteSnapshot {
    pub fn new(generation: u64, observations: Vec<Observation>, source: &'static str) -> Self {
        Self {
            generation,
            observations,
            source,
            fetched_at: Utc::now(),
            received_at: now(),
        }
    }

    pub fn by_symbol(&self) -> BTreeMap<String, Vec<Observation>> {
        group_by_symbol(&self.observations)
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn age(&self) -> std::time::Duration {
        self.received_at.elapsed()
    }
}
