//! Fallback feed knobs.
//!
//! When the remote quote service is unreachable (or returns nothing) the
//! dashboard generates a random walk per symbol so the UI stays usable.

use crate::utils::TimeUtils;

pub struct SyntheticConfig {
    /// Observations generated per symbol
    pub points_per_symbol: usize,
    /// Spacing between consecutive observations
    pub step_ms: i64,
    /// Each step moves the price by a uniform draw in [-max_step, max_step)
    pub max_step: f64,
    /// Prices never walk below this floor
    pub price_floor: f64,
    /// Starting price for tickers missing from the symbol table
    pub default_base_price: f64,
    /// Decimal places kept on price and change
    pub decimals: i32,
}

pub const SYNTHETIC: SyntheticConfig = SyntheticConfig {
    points_per_symbol: 20,
    step_ms: TimeUtils::MS_IN_MIN,
    max_step: 2.0,
    price_floor: 1.0,
    default_base_price: 100.0,
    decimals: 2,
};
