/// Round to `dp` decimal places (half away from zero).
pub fn round_dp(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Clamp into [-1.0, 1.0]. NaN passes through untouched.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Absolute tolerance comparison for test and display code.
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_dp(150.256, 2), 150.26);
        assert_eq!(round_dp(-1.994, 2), -1.99);
        assert_eq!(round_dp(3.0, 2), 3.0);
    }

    #[test]
    fn clamps_rounding_drift() {
        assert_eq!(clamp_unit(1.000_000_000_2), 1.0);
        assert_eq!(clamp_unit(-1.3), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }
}
