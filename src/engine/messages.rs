use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::data::QuoteSnapshot;
use crate::models::{DashboardModel, ViewConfig};

/// A request to build the dashboard model for one snapshot and view
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub snapshot: Arc<QuoteSnapshot>,
    pub view: ViewConfig,
    // Wall clock captured at dispatch so the whole build uses one `now`
    pub now: DateTime<Utc>,
}

impl BuildRequest {
    pub fn key(&self) -> BuildKey {
        BuildKey {
            generation: self.snapshot.generation,
            view: self.view.clone(),
        }
    }
}

/// Identifies what a model was built from
#[derive(Debug, Clone, PartialEq)]
pub struct BuildKey {
    pub generation: u64,
    pub view: ViewConfig,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub key: BuildKey,
    pub elapsed: Duration,
    // The new front buffer
    pub model: Arc<DashboardModel>,
}
