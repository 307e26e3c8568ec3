use chrono::Utc;
use poll_promise::Promise;
use std::sync::Arc;

use crate::config::FeedSettings;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{FeedStatus, QuotePoller, QuoteSnapshot};
use crate::models::{DashboardModel, ViewConfig};

use super::messages::{BuildKey, BuildRequest, BuildResult};
use super::state::ModelState;
use super::worker;

pub struct DashboardEngine {
    /// Live data feed
    poller: QuotePoller,

    /// Front buffer
    pub state: ModelState,

    /// At most one build in flight
    pending: Option<Promise<BuildResult>>,
}

impl DashboardEngine {
    /// Initialize the engine and start polling.
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            poller: QuotePoller::start(settings),
            state: ModelState::default(),
            pending: None,
        }
    }

    /// THE GAME LOOP.
    /// Returns TRUE while a build is in flight, so the UI keeps repainting.
    pub fn update(&mut self, view: &ViewConfig) -> bool {
        // 1. Let the poller do any inline work (wasm)
        self.poller.tick();

        // 2. Swap buffers if the in-flight build finished
        self.collect_finished_build();

        // 3. Dispatch a build when the snapshot or the view moved on
        if self.pending.is_none() {
            if let Some(snapshot) = self.poller.latest() {
                let wanted = BuildKey {
                    generation: snapshot.generation,
                    view: view.clone(),
                };
                if !self.state.is_current(&wanted) {
                    self.dispatch(snapshot, view.clone());
                }
            }
        }

        self.is_building()
    }

    /// Accessor for UI
    pub fn model(&self) -> Option<Arc<DashboardModel>> {
        self.state.model.clone()
    }

    pub fn feed_status(&self) -> FeedStatus {
        self.poller.status()
    }

    pub fn latest_snapshot(&self) -> Option<Arc<QuoteSnapshot>> {
        self.poller.latest()
    }

    pub fn is_building(&self) -> bool {
        self.pending.is_some()
    }

    // --- INTERNAL LOGIC ---

    fn dispatch(&mut self, snapshot: Arc<QuoteSnapshot>, view: ViewConfig) {
        let req = BuildRequest {
            snapshot,
            view,
            now: Utc::now(),
        };
        self.pending = Some(worker::spawn_build(req));
    }

    fn collect_finished_build(&mut self) {
        let Some(promise) = self.pending.take() else {
            return;
        };
        let result = match promise.try_take() {
            Ok(result) => result,
            Err(still_running) => {
                self.pending = Some(still_running);
                return;
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_model_timings {
            log::info!(
                "Model gen {} built in {:.1}ms",
                result.key.generation,
                result.elapsed.as_secs_f64() * 1000.0
            );
        }

        if !self.state.update_buffer(result) {
            log::warn!("Discarded out-of-date dashboard model");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for<F: Fn(&DashboardModel) -> bool>(
        engine: &mut DashboardEngine,
        view: &ViewConfig,
        done: F,
    ) -> Option<Arc<DashboardModel>> {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            engine.update(view);
            if let Some(model) = engine.model() {
                if done(&model) {
                    return Some(model);
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn offline_engine_builds_and_rebuilds_on_view_change() {
        let settings = FeedSettings {
            offline: true,
            ..Default::default()
        };
        let mut engine = DashboardEngine::new(settings);

        let view = ViewConfig::default();
        let model = wait_for(&mut engine, &view, |_| true).unwrap();
        assert!(model.generation >= 1);
        assert_eq!(model.heatmap.len(), 20);
        assert_eq!(engine.feed_status().last_source, Some("Synthetic random walk"));

        let single = ViewConfig {
            show_all: false,
            ..view
        };
        let model = wait_for(&mut engine, &single, |m| !m.view.show_all).unwrap();
        assert_eq!(model.heatmap.len(), 1);
    }
}
