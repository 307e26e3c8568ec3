// Domain types and value objects
pub mod observation;
pub mod time_frame;

// Re-export commonly used types
pub use observation::Observation;
pub use time_frame::TimeFrame;
