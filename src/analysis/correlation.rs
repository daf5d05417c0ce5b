//! Pearson correlation (PMCC), OLS regression of the index on gold, and the
//! two-tailed significance test on r.
//!
//! Everything is computed over "valid pairs": rows where both series are
//! defined. Moments use the two-pass method (means first, then sums of
//! deviation products), which stays accurate for index levels in the
//! thousands where the naive `Σx² - n·x̄²` form loses most of its digits.

use statrs::distribution::{ContinuousCDF, StudentsT};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::PricePoint;
use crate::models::{CorrelationDirection, CorrelationStrength, CorrelationSummary};
use crate::utils::maths_utils::{checked_div, finite};

const PERFECT_FIT_TOLERANCE: f64 = 1e-12;

/// Means and centred second moments of a set of (x, y) pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMoments {
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    /// Σ(x - x̄)²
    pub sxx: f64,
    /// Σ(y - ȳ)²
    pub syy: f64,
    /// Σ(x - x̄)(y - ȳ)
    pub sxy: f64,
    // A series whose values are all identical has zero variance, whatever
    // rounding noise the deviation sums picked up
    x_constant: bool,
    y_constant: bool,
}

impl PairMoments {
    /// `None` for fewer than two pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Option<Self> {
        let n = pairs.len();
        if n < 2 {
            return None;
        }

        let count = n as f64;
        let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / count;
        let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / count;

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for &(x, y) in pairs {
            let (dx, dy) = (x - mean_x, y - mean_y);
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        let (x0, y0) = pairs[0];
        let moments = PairMoments {
            n,
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
            x_constant: pairs.iter().all(|&(x, _)| x == x0),
            y_constant: pairs.iter().all(|&(_, y)| y == y0),
        };

        [mean_x, mean_y, sxx, syy, sxy]
            .iter()
            .all(|v| v.is_finite())
            .then_some(moments)
    }

    fn x_has_variance(&self) -> bool {
        !self.x_constant && self.sxx > 0.0
    }

    fn y_has_variance(&self) -> bool {
        !self.y_constant && self.syy > 0.0
    }

    /// Pearson r, clamped to [-1, 1]. `None` if either series has zero variance.
    pub fn pearson_r(&self) -> Option<f64> {
        if !self.x_has_variance() || !self.y_has_variance() {
            return None;
        }
        // Product of roots, not root of product: sxx * syy can leave f64 range
        let r = checked_div(self.sxy, self.sxx.sqrt() * self.syy.sqrt())?;
        Some(r.clamp(-1.0, 1.0))
    }

    /// OLS fit `y = slope * x + intercept`. `None` if x has zero variance.
    pub fn regression(&self) -> Option<(f64, f64)> {
        if !self.x_has_variance() {
            return None;
        }
        let slope = checked_div(self.sxy, self.sxx)?;
        let intercept = finite(self.mean_y - slope * self.mean_x)?;
        Some((slope, intercept))
    }
}

/// The (gold, index) values of every valid pair, in order.
pub fn valid_pairs(points: &[PricePoint]) -> Vec<(f64, f64)> {
    points.iter().filter_map(PricePoint::valid_pair).collect()
}

/// Pearson r of gold against the index over the valid pairs of `points`.
pub fn pearson(points: &[PricePoint]) -> Option<f64> {
    PairMoments::from_pairs(&valid_pairs(points))?.pearson_r()
}

/// Two-tailed p-value for H0: ρ = 0, from `t = r·√((n-2)/(1-r²))` with `n - 2`
/// degrees of freedom.
///
/// `None` for `n <= 2` (no degrees of freedom). A perfect correlation gives
/// exactly `0.0`.
pub fn two_tailed_p_value(r: f64, n: usize) -> Option<f64> {
    if n <= 2 || !r.is_finite() {
        return None;
    }

    // Treat r within rounding distance of ±1 as a perfect fit
    if 1.0 - r.abs() <= PERFECT_FIT_TOLERANCE {
        return Some(0.0);
    }

    let one_minus_r2 = 1.0 - r * r;
    let df = (n - 2) as f64;
    let t = r * (df / one_minus_r2).sqrt();
    let distribution = StudentsT::new(0.0, 1.0, df).ok()?;

    // Survival function keeps precision for large |t| where 1 - cdf would round to 0
    finite(2.0 * distribution.sf(t.abs())).map(|p| p.clamp(0.0, 1.0))
}

/// Full correlation summary of gold vs the index over the selection.
///
/// Never fails: with fewer than two valid pairs every statistic is `None`,
/// and a flat series leaves `r` undefined (the regression is still reported
/// when only the index is flat).
pub fn calculate_correlation(points: &[PricePoint]) -> CorrelationSummary {
    let pairs = valid_pairs(points);
    let sample_size = pairs.len();

    let Some(moments) = PairMoments::from_pairs(&pairs) else {
        return CorrelationSummary::undefined(sample_size);
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_correlation_inputs {
        log::info!(
            "Correlation inputs: n={} of {} rows, sxx={:.6e}, syy={:.6e}, sxy={:.6e}",
            moments.n,
            points.len(),
            moments.sxx,
            moments.syy,
            moments.sxy
        );
    }

    let r = moments.pearson_r();
    let (slope, intercept) = match moments.regression() {
        Some((slope, intercept)) => (Some(slope), Some(intercept)),
        None => (None, None),
    };

    if r.is_none() {
        log::debug!(
            "Correlation undefined over {} valid pairs: a series has zero variance",
            sample_size
        );
    }

    CorrelationSummary {
        r,
        r_squared: r.map(|r| r * r),
        slope,
        intercept,
        p_value: r.and_then(|r| two_tailed_p_value(r, sample_size)),
        strength: r.map(CorrelationStrength::classify),
        direction: CorrelationDirection::of(r),
        sample_size,
    }
}
