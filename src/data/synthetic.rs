//! Random-walk quote generator used when the remote service is unavailable.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::{SYMBOLS, SYNTHETIC, symbols};
use crate::domain::Observation;
use crate::utils::maths_utils::round_dp;

/// Every ticker in the symbol table, in table order.
pub fn default_symbols() -> Vec<String> {
    SYMBOLS.iter().map(|info| info.symbol.to_string()).collect()
}

/// `points` observations for one symbol, one step apart, the last one at `now`.
///
/// Each step draws `change` uniformly from `[-max_step, max_step)` and floors
/// the walk at `price_floor`. Stored price and change are rounded; the walk
/// itself continues from the unrounded price.
pub fn generate_series<R: Rng + ?Sized>(
    rng: &mut R,
    symbol: &str,
    points: usize,
    now: DateTime<Utc>,
) -> Vec<Observation> {
    let mut price = symbols::lookup(symbol)
        .map(|info| info.base_price)
        .unwrap_or(SYNTHETIC.default_base_price);
    let step = Duration::milliseconds(SYNTHETIC.step_ms);
    let first = now - step * points.saturating_sub(1) as i32;

    (0..points)
        .map(|i| {
            let change = rng.random_range(-SYNTHETIC.max_step..SYNTHETIC.max_step);
            price = (price + change).max(SYNTHETIC.price_floor);
            Observation::new(
                symbol,
                round_dp(price, SYNTHETIC.decimals),
                round_dp(change, SYNTHETIC.decimals),
                first + step * i as i32,
            )
        })
        .collect()
}

/// Flat snapshot for many symbols, grouped symbol by symbol like the remote feed.
pub fn generate_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    symbols: &[String],
    points: usize,
    now: DateTime<Utc>,
) -> Vec<Observation> {
    symbols
        .iter()
        .flat_map(|symbol| generate_series(rng, symbol, points, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn series_ends_at_now_one_minute_apart() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series(&mut rng, "AAPL", 20, now());

        assert_eq!(series.len(), 20);
        assert_eq!(series.last().map(|o| o.timestamp), Some(now()));
        assert_eq!(series[0].timestamp, now() - Duration::minutes(19));
        for pair in series.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(1));
        }
        assert!(series.iter().all(|o| o.symbol == "AAPL"));
    }

    #[test]
    fn walk_stays_near_base_and_within_step_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = generate_series(&mut rng, "MSFT", 20, now());

        // 20 steps of at most 2.0 from 285.50
        for obs in &series {
            assert!(obs.change >= -2.0 && obs.change <= 2.0);
            assert!((obs.price - 285.50).abs() <= 40.0 + 0.01);
            assert_eq!(obs.price, round_dp(obs.price, 2));
        }
    }

    #[test]
    fn cheap_symbols_never_drop_below_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let series = generate_series(&mut rng, "PENNY", 200, now());
            assert!(series.iter().all(|o| o.price >= 1.0));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let symbols = vec!["AAPL".to_string(), "UNKNOWN".to_string()];
        let a = generate_snapshot(&mut StdRng::seed_from_u64(11), &symbols, 5, now());
        let b = generate_snapshot(&mut StdRng::seed_from_u64(11), &symbols, 5, now());

        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert!(a[..5].iter().all(|o| o.symbol == "AAPL"));
        // Unknown tickers start from the default base price
        assert!((a[5].price - 100.0).abs() <= 2.0 + 0.01);
    }

    #[test]
    fn zero_points_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_series(&mut rng, "AAPL", 0, now()).is_empty());
        assert_eq!(default_symbols().len(), 20);
    }
}
