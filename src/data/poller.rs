//! Periodic refresh of the quote snapshot.
//!
//! The poll loop owns the providers and writes each complete result into a
//! single-owner slot. Readers only ever see whole snapshots; a newer
//! generation simply replaces the older one.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::FeedSettings;
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
use crate::config::DEBUG_FLAGS;
use crate::data::snapshot::QuoteSnapshot;
use crate::domain::Observation;

#[cfg(not(target_arch = "wasm32"))]
use crate::data::quote_source::{CreateQuoteSnapshot, build_providers, get_snapshot_async};
#[cfg(not(target_arch = "wasm32"))]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_arch = "wasm32")]
use crate::data::quote_source::{CreateQuoteSnapshot, SyntheticQuoteSource};
#[cfg(target_arch = "wasm32")]
use crate::utils::app_time::{AppInstant, now};

/// User-visible feed problems
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// A provider answered but had nothing for us
    NoData,
    /// Every provider in the chain failed
    AllSourcesFailed(String),
    /// General error with a message
    General(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::NoData => write!(f, "No stock data available"),
            FeedError::AllSourcesFailed(msg) => write!(f, "Error fetching stock data: {}", msg),
            FeedError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

/// Counters and the most recent problem, for the status bar.
#[derive(Debug, Clone, Default)]
pub struct FeedStatus {
    pub polls: u64,
    pub failures: u64,
    pub last_source: Option<&'static str>,
    pub last_error: Option<FeedError>,
}

#[derive(Default)]
struct SlotState {
    latest: Option<Arc<QuoteSnapshot>>,
    generation: u64,
    status: FeedStatus,
}

/// The single-owner result slot shared between the poll loop and the engine.
#[derive(Default)]
pub struct SnapshotSlot {
    state: Mutex<SlotState>,
}

impl SnapshotSlot {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current snapshot. Returns the new generation, or `None`
    /// when the provider returned nothing (the previous snapshot is kept).
    pub fn publish(&self, observations: Vec<Observation>, source: &'static str) -> Option<u64> {
        let mut state = self.lock();
        state.status.polls += 1;
        state.status.last_source = Some(source);

        if observations.is_empty() {
            state.status.last_error = Some(FeedError::NoData);
            return None;
        }

        state.generation += 1;
        let generation = state.generation;
        state.latest = Some(Arc::new(QuoteSnapshot::new(generation, observations, source)));
        state.status.last_error = None;
        Some(generation)
    }

    pub fn record_failure(&self, error: FeedError) {
        let mut state = self.lock();
        state.status.polls += 1;
        state.status.failures += 1;
        state.status.last_error = Some(error);
    }

    pub fn latest(&self) -> Option<Arc<QuoteSnapshot>> {
        self.lock().latest.clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn status(&self) -> FeedStatus {
        self.lock().status.clone()
    }
}

/// Run the provider chain once and publish the outcome.
#[cfg(not(target_arch = "wasm32"))]
pub async fn poll_once(
    providers: &[Box<dyn CreateQuoteSnapshot>],
    slot: &SnapshotSlot,
) -> Option<u64> {
    match get_snapshot_async(providers).await {
        Ok((observations, source)) => {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_poll_results {
                log::info!("Poll: {} observations from {}", observations.len(), source);
            }
            slot.publish(observations, source)
        }
        Err(e) => {
            log::error!("❌ Quote poll failed: {:#}", e);
            slot.record_failure(FeedError::AllSourcesFailed(format!("{:#}", e)));
            None
        }
    }
}

/// Background poller. Polls immediately on start, then once per interval,
/// until dropped.
#[cfg(not(target_arch = "wasm32"))]
pub struct QuotePoller {
    slot: Arc<SnapshotSlot>,
    shutdown: Arc<AtomicBool>,
}

#[cfg(not(target_arch = "wasm32"))]
impl QuotePoller {
    pub fn start(settings: FeedSettings) -> Self {
        let slot = Arc::new(SnapshotSlot::default());
        let shutdown = Arc::new(AtomicBool::new(false));

        // Clone Arcs to move into the background thread
        let slot_arc = slot.clone();
        let shutdown_arc = shutdown.clone();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("❌ Could not start poller runtime: {}", e);
                    slot_arc.record_failure(FeedError::General(e.to_string()));
                    return;
                }
            };
            rt.block_on(run_poll_loop(settings, slot_arc, shutdown_arc));
        });

        Self { slot, shutdown }
    }

    /// Nothing to do on native: the background thread drives polling.
    pub fn tick(&mut self) {}

    pub fn latest(&self) -> Option<Arc<QuoteSnapshot>> {
        self.slot.latest()
    }

    pub fn status(&self) -> FeedStatus {
        self.slot.status()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for QuotePoller {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn run_poll_loop(settings: FeedSettings, slot: Arc<SnapshotSlot>, shutdown: Arc<AtomicBool>) {
    let providers = build_providers(&settings);
    let interval = settings.poll_interval();
    log::info!(
        ">>> QuotePoller: {} provider(s), polling every {:?}",
        providers.len(),
        interval
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    while !shutdown.load(Ordering::Relaxed) {
        ticker.tick().await;
        poll_once(&providers, &slot).await;
    }
    log::info!("QuotePoller stopped");
}

/// Browser build: no threads or network, so regenerate synthetic data on the UI tick.
#[cfg(target_arch = "wasm32")]
pub struct QuotePoller {
    slot: SnapshotSlot,
    source: SyntheticQuoteSource,
    interval: std::time::Duration,
    last_poll: Option<AppInstant>,
}

#[cfg(target_arch = "wasm32")]
impl QuotePoller {
    pub fn start(settings: FeedSettings) -> Self {
        Self {
            slot: SnapshotSlot::default(),
            source: SyntheticQuoteSource::default(),
            interval: settings.poll_interval(),
            last_poll: None,
        }
    }

    pub fn tick(&mut self) {
        let due = self
            .last_poll
            .map_or(true, |last| last.elapsed() >= self.interval);
        if due {
            self.last_poll = Some(now());
            self.slot.publish(self.source.generate(), self.source.signature());
        }
    }

    pub fn latest(&self) -> Option<Arc<QuoteSnapshot>> {
        self.slot.latest()
    }

    pub fn status(&self) -> FeedStatus {
        self.slot.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quote_source::SyntheticQuoteSource;
    use chrono::Utc;

    fn obs(price: f64) -> Observation {
        Observation::new("AAPL", price, 0.0, Utc::now())
    }

    #[test]
    fn publishing_bumps_generation_and_replaces_snapshot() {
        let slot = SnapshotSlot::default();
        assert!(slot.latest().is_none());

        assert_eq!(slot.publish(vec![obs(1.0)], "test"), Some(1));
        assert_eq!(slot.publish(vec![obs(2.0), obs(3.0)], "test"), Some(2));

        let latest = slot.latest().unwrap();
        assert_eq!(latest.generation, 2);
        assert_eq!(latest.observations.len(), 2);
        assert_eq!(slot.generation(), 2);
        assert_eq!(slot.status().polls, 2);
    }

    #[test]
    fn empty_result_keeps_previous_snapshot_and_flags_no_data() {
        let slot = SnapshotSlot::default();
        slot.publish(vec![obs(1.0)], "test");

        assert_eq!(slot.publish(Vec::new(), "test"), None);
        assert_eq!(slot.latest().map(|s| s.generation), Some(1));
        assert_eq!(slot.status().last_error, Some(FeedError::NoData));

        slot.publish(vec![obs(2.0)], "test");
        assert_eq!(slot.status().last_error, None);
    }

    #[test]
    fn failures_are_counted_and_displayed() {
        let slot = SnapshotSlot::default();
        slot.record_failure(FeedError::AllSourcesFailed("timeout".into()));

        let status = slot.status();
        assert_eq!(status.failures, 1);
        assert_eq!(
            status.last_error.map(|e| e.to_string()),
            Some("Error fetching stock data: timeout".to_string())
        );
        assert_eq!(FeedError::NoData.to_string(), "No stock data available");
    }

    #[tokio::test]
    async fn poll_once_publishes_synthetic_data() {
        let slot = SnapshotSlot::default();
        let providers: Vec<Box<dyn CreateQuoteSnapshot>> =
            vec![Box::new(SyntheticQuoteSource::default())];

        assert_eq!(poll_once(&providers, &slot).await, Some(1));
        let snapshot = slot.latest().unwrap();
        assert_eq!(snapshot.source, "Synthetic random walk");
        assert_eq!(snapshot.by_symbol().len(), 20);
    }

    #[tokio::test]
    async fn poll_once_records_chain_failure() {
        let slot = SnapshotSlot::default();
        assert_eq!(poll_once(&[], &slot).await, None);
        assert_eq!(slot.status().failures, 1);
    }
}
