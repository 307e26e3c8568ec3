// View state and the per-frame dashboard model
// Pure data: built off the UI thread, read by the renderer

pub mod dashboard;
pub mod view;

// Re-export key types for convenience
pub use dashboard::{ChartData, DashboardModel};
pub use view::{ViewConfig, WatchlistEntry, filter_watchlist};
