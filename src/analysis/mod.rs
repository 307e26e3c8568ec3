// Windowing, alignment and correlation over quote series
pub mod correlation;
pub mod series_aligner;

// Re-export commonly used types
pub use correlation::{
    CellKind, CorrelationMatrix, PairAlignment, build_matrix, build_matrix_with, pearson,
    pearson_joined,
};
pub use series_aligner::{
    WideRow, build_wide_table, group_by_symbol, latest_by_symbol, window_by_symbol,
    window_series, windowed_prices,
};
