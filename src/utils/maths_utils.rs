//! Small numeric helpers shared by the calculators.
//!
//! Each one returns `None` instead of producing `NaN` or `±Infinity`.

/// Keep a value only if it is a real, finite number.
#[inline]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `numerator / denominator`, or `None` when the denominator is zero or the result is not finite.
#[inline]
pub fn checked_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    finite(numerator / denominator)
}

/// Percentage change from `start` to `end`, e.g. 50 -> 75 is `50.0`.
pub fn pct_change(start: f64, end: f64) -> Option<f64> {
    checked_div(end - start, start).and_then(|ratio| finite(ratio * 100.0))
}

/// Express `value` relative to `base` on a base-100 scale.
/// `rebase(x, x)` is exactly `100.0` for any finite non-zero `x`.
pub fn rebase(value: f64, base: f64) -> Option<f64> {
    checked_div(value, base).and_then(|ratio| finite(ratio * 100.0))
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    finite(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_change_handles_zero_start() {
        assert_eq!(pct_change(50.0, 75.0), Some(50.0));
        assert_eq!(pct_change(100.0, 50.0), Some(-50.0));
        assert_eq!(pct_change(0.0, 10.0), None);
        assert_eq!(pct_change(0.0, 0.0), None);
    }

    #[test]
    fn rebase_at_base_is_exactly_one_hundred() {
        for base in [0.1, 1.0, 3.3, 1234.567, 1e-300] {
            assert_eq!(rebase(base, base), Some(100.0));
        }
        assert_eq!(rebase(5.0, 0.0), None);
    }

    #[test]
    fn overflow_is_not_forwarded() {
        assert_eq!(checked_div(f64::MAX, 1e-300), None);
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }
}
