use poll_promise::Promise;
use std::sync::Arc;

use super::messages::{BuildRequest, BuildResult};
use crate::models::DashboardModel;
use crate::utils::app_time::now;

/// Run the (pure) model build on a background thread.
/// On wasm32 there are no threads, so the build runs inline.
pub fn spawn_build(req: BuildRequest) -> Promise<BuildResult> {
    #[cfg(not(target_arch = "wasm32"))]
    let promise = Promise::spawn_thread("dashboard_model", move || run_build(req));

    #[cfg(target_arch = "wasm32")]
    let promise = Promise::from_ready(run_build(req));

    promise
}

pub fn run_build(req: BuildRequest) -> BuildResult {
    let start = now();
    let key = req.key();
    let model = DashboardModel::build(&req.snapshot, &req.view, req.now);
    BuildResult {
        key,
        elapsed: start.elapsed(),
        model: Arc::new(model),
    }
}
