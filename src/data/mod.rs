// Quote providers, synthetic fallback and the polling loop
pub mod poller;
pub mod quote_source;
pub mod snapshot;
pub mod synthetic;

// Re-export commonly used types
pub use poller::{FeedError, FeedStatus, QuotePoller, SnapshotSlot};
pub use quote_source::{CreateQuoteSnapshot, SyntheticQuoteSource, get_snapshot_async};
pub use snapshot::QuoteSnapshot;
