#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// The engine
pub mod engine;

// Re-export commonly used types
pub use analysis::{CorrelationMatrix, PairAlignment, WideRow, build_matrix, build_wide_table, pearson, window_series};
pub use config::FeedSettings;
pub use domain::{Observation, TimeFrame};
pub use models::{DashboardModel, ViewConfig};
pub use ui::DashboardApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the quote service (defaults to the built-in endpoint)
    #[arg(long)]
    pub api_base: Option<String>,

    /// JSON file with the service credentials; without it only synthetic quotes are shown
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Never contact the quote service
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Milliseconds between polls
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Pair heatmap series on matching timestamps instead of truncating to the shorter one
    #[arg(long, default_value_t = false)]
    pub join_timestamps: bool,
}

impl Cli {
    pub fn feed_settings(&self) -> FeedSettings {
        let defaults = FeedSettings::default();
        FeedSettings {
            base_url: self.api_base.clone().unwrap_or(defaults.base_url),
            credentials_path: self.credentials.clone(),
            offline: self.offline,
            poll_interval_ms: self.poll_interval_ms.unwrap_or(defaults.poll_interval_ms),
            timeout_ms: defaults.timeout_ms,
        }
    }

    pub fn initial_view(&self) -> ViewConfig {
        let mut view = ViewConfig::default();
        if self.join_timestamps {
            view.alignment = PairAlignment::TimestampJoin;
        }
        view
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: &Cli) -> Box<dyn eframe::App> {
    // 1. Initialize the Engine (starts polling)
    let engine = crate::engine::DashboardEngine::new(args.feed_settings());

    let app = ui::DashboardApp::new(cc, engine, args.initial_view());
    Box::new(app)
}
