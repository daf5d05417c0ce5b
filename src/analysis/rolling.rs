use itertools::{Itertools, MinMaxResult};

use crate::analysis::correlation::PairMoments;
#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::PricePoint;
use crate::models::{RollingPoint, RollingStats};

/// Pearson r over each trailing window of `window` consecutive points.
///
/// Emits one point per full window, dated at the window's last point, so the
/// output has `max(0, n - window + 1)` entries. A window with fewer than two
/// valid pairs (or a flat series inside it) yields `value: None`. A zero
/// window has no full windows and gives an empty result.
pub fn rolling_correlation(points: &[PricePoint], window: usize) -> Vec<RollingPoint> {
    if window == 0 || window > points.len() {
        return Vec::new();
    }

    let pairs: Vec<Option<(f64, f64)>> = points.iter().map(PricePoint::valid_pair).collect();
    let mut buffer: Vec<(f64, f64)> = Vec::with_capacity(window);

    pairs
        .windows(window)
        .zip(points.iter().skip(window - 1))
        .map(|(slots, last)| {
            buffer.clear();
            buffer.extend(slots.iter().flatten());

            let value = PairMoments::from_pairs(&buffer).and_then(|m| m.pearson_r());

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_rolling_gaps && value.is_none() {
                log::info!(
                    "Rolling window ending {}: {} valid pairs, no correlation",
                    last.date,
                    buffer.len()
                );
            }

            RollingPoint {
                date: last.date,
                value,
            }
        })
        .collect()
}

/// Mean, min and max of the defined rolling values; `None` if there are none.
pub fn rolling_stats(rolling: &[RollingPoint]) -> Option<RollingStats> {
    let values: Vec<f64> = rolling.iter().filter_map(|p| p.value).collect();
    let mean = crate::utils::maths_utils::mean(&values)?;

    let (min, max) = match values.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    Some(RollingStats {
        mean,
        min,
        max,
        defined_count: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn points(gold: &[Option<f64>], index: &[Option<f64>]) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        gold.iter()
            .zip(index)
            .enumerate()
            .map(|(i, (g, x))| PricePoint::new(start + Days::new(i as u64), *g, *x))
            .collect()
    }

    fn ramp(n: usize) -> Vec<PricePoint> {
        let gold: Vec<_> = (0..n).map(|i| Some(100.0 + i as f64)).collect();
        let index: Vec<_> = (0..n).map(|i| Some(1000.0 + 3.0 * i as f64)).collect();
        points(&gold, &index)
    }

    #[test]
    fn output_length_is_n_minus_w_plus_one() {
        let data = ramp(20);
        for w in 1..=20 {
            assert_eq!(rolling_correlation(&data, w).len(), 20 - w + 1);
        }
        assert!(rolling_correlation(&data, 21).is_empty());
        assert!(rolling_correlation(&data, 0).is_empty());
        assert!(rolling_correlation(&[], 3).is_empty());
    }

    #[test]
    fn dated_at_window_end() {
        let data = ramp(6);
        let out = rolling_correlation(&data, 3);
        let dates: Vec<_> = out.iter().map(|p| p.date).collect();
        let expected: Vec<_> = data[2..].iter().map(|p| p.date).collect();
        assert_eq!(dates, expected);
        assert!(out.iter().all(|p| approx_eq(p.value.unwrap(), 1.0)));
    }

    #[test]
    fn window_of_one_never_has_a_value() {
        let out = rolling_correlation(&ramp(5), 1);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|p| p.value.is_none()));
    }

    #[test]
    fn sparse_windows_are_absent_not_errors() {
        let gold = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
        let index = [Some(2.0), None, None, Some(8.0), Some(10.0)];
        let out = rolling_correlation(&points(&gold, &index), 3);
        assert_eq!(out.len(), 3);
        // [0..=2] has one valid pair
        assert_eq!(out[0].value, None);
        // [1..=3] has one valid pair
        assert_eq!(out[1].value, None);
        // [2..=4] has two valid pairs
        assert!(approx_eq(out[2].value.unwrap(), 1.0));
    }

    #[test]
    fn flat_window_is_absent() {
        // Gold is flat over rows 2..=4 only
        let gold = [1.0, 3.0, 5.0, 5.0, 5.0, 2.0, 7.0];
        let index = [2.0, 1.0, 4.0, 6.0, 3.0, 8.0, 5.0];
        let data = points(
            &gold.iter().copied().map(Some).collect::<Vec<_>>(),
            &index.iter().copied().map(Some).collect::<Vec<_>>(),
        );
        let out = rolling_correlation(&data, 3);
        assert_eq!(out.len(), 5);
        for (i, p) in out.iter().enumerate() {
            if i == 2 {
                assert_eq!(p.value, None);
            } else {
                assert!(p.value.is_some(), "window ending at row {}", i + 2);
            }
        }
    }

    #[test]
    fn matches_full_correlation_on_each_window() {
        let gold = [3.0, 1.5, 8.25, 4.0, 9.5, 2.0, 7.75, 6.0];
        let index = [2.0, 2.5, 7.0, 5.5, 7.5, 1.0, 9.0, 4.0];
        let data = points(
            &gold.iter().copied().map(Some).collect::<Vec<_>>(),
            &index.iter().copied().map(Some).collect::<Vec<_>>(),
        );
        let out = rolling_correlation(&data, 4);
        for (i, p) in out.iter().enumerate() {
            let expected = crate::analysis::correlation::pearson(&data[i..i + 4]);
            assert_eq!(p.value, expected);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let data = ramp(40);
        assert_eq!(rolling_correlation(&data, 12), rolling_correlation(&data, 12));
    }

    #[test]
    fn stats_cover_defined_values_only() {
        let rolling = [
            RollingPoint { date: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(), value: Some(0.5) },
            RollingPoint { date: NaiveDate::from_ymd_opt(2001, 1, 2).unwrap(), value: None },
            RollingPoint { date: NaiveDate::from_ymd_opt(2001, 1, 3).unwrap(), value: Some(-0.25) },
            RollingPoint { date: NaiveDate::from_ymd_opt(2001, 1, 4).unwrap(), value: Some(1.0) },
        ];
        let stats = rolling_stats(&rolling).unwrap();
        assert_eq!(stats.defined_count, 3);
        assert!(approx_eq(stats.mean, 1.25 / 3.0));
        assert_eq!(stats.min, -0.25);
        assert_eq!(stats.max, 1.0);

        assert_eq!(rolling_stats(&rolling[1..2]), None);
        assert_eq!(rolling_stats(&[]), None);
    }
}
