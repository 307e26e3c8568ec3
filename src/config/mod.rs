//! Configuration module for the quote dashboard.

pub mod analysis;
pub mod feed;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;
pub mod symbols;
pub mod synthetic;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use feed::{FEED, FeedSettings};
pub use symbols::{SYMBOLS, SymbolInfo, company_name};
pub use synthetic::SYNTHETIC;
