use std::sync::Arc;

use super::messages::{BuildKey, BuildResult};
use crate::models::DashboardModel;
use crate::utils::app_time::{AppInstant, now};

/// Front buffer plus bookkeeping for the dashboard model.
#[derive(Debug, Clone, Default)]
pub struct ModelState {
    /// THE FRONT BUFFER.
    /// The UI reads this every frame. It is never locked for writing.
    /// When a new model is ready, we simply replace this Arc pointer.
    pub model: Option<Arc<DashboardModel>>,

    /// What the front buffer was built from
    pub built_for: Option<BuildKey>,
    pub last_update_time: Option<AppInstant>,
}

impl ModelState {
    /// Promote a finished build to the front buffer.
    /// Results older than the current front buffer are ignored.
    pub fn update_buffer(&mut self, result: BuildResult) -> bool {
        let current_generation = self.built_for.as_ref().map(|key| key.generation);
        if current_generation.is_some_and(|generation| result.key.generation < generation) {
            return false;
        }
        self.model = Some(result.model);
        self.built_for = Some(result.key);
        self.last_update_time = Some(now());
        true
    }

    pub fn is_current(&self, key: &BuildKey) -> bool {
        self.built_for.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QuoteSnapshot;
    use crate::engine::messages::BuildRequest;
    use crate::engine::worker::run_build;
    use crate::models::ViewConfig;
    use chrono::Utc;

    fn build(generation: u64) -> BuildResult {
        run_build(BuildRequest {
            snapshot: Arc::new(QuoteSnapshot::new(generation, Vec::new(), "test")),
            view: ViewConfig::default(),
            now: Utc::now(),
        })
    }

    #[test]
    fn newer_results_replace_front_buffer() {
        let mut state = ModelState::default();
        assert!(state.update_buffer(build(1)));
        assert!(state.update_buffer(build(3)));
        assert_eq!(state.model.as_ref().map(|m| m.generation), Some(3));
    }

    #[test]
    fn stale_results_never_overwrite_newer_ones() {
        let mut state = ModelState::default();
        state.update_buffer(build(5));
        assert!(!state.update_buffer(build(4)));
        assert_eq!(state.model.as_ref().map(|m| m.generation), Some(5));
        assert!(state.is_current(&build(5).key));
    }
}
