use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two series compared by the engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Series {
    Gold,
    Index,
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Series::Gold => write!(f, "Gold"),
            Series::Index => write!(f, "S&P 500"),
        }
    }
}

/// One row of the aligned dataset.
///
/// A missing price (market holiday, data gap) is `None`, never `0.0` and never `NaN`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub gold: Option<f64>,
    pub index: Option<f64>,
}

impl PricePoint {
    // Non-finite inputs are treated as absent so they can never leak into arithmetic
    pub fn new(date: NaiveDate, gold: Option<f64>, index: Option<f64>) -> Self {
        PricePoint {
            date,
            gold: gold.filter(|v| v.is_finite()),
            index: index.filter(|v| v.is_finite()),
        }
    }

    /// The series value, if present and finite. Deserialized or hand-built
    /// points skip `new`, so the filter is repeated here.
    pub fn value(&self, series: Series) -> Option<f64> {
        match series {
            Series::Gold => self.gold,
            Series::Index => self.index,
        }
        .filter(|v| v.is_finite())
    }

    /// Both values, if both are present and finite (a "valid pair").
    pub fn valid_pair(&self) -> Option<(f64, f64)> {
        match (self.gold, self.index) {
            (Some(g), Some(i)) if g.is_finite() && i.is_finite() => Some((g, i)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn non_finite_values_become_absent() {
        let p = PricePoint::new(day(1), Some(f64::NAN), Some(f64::INFINITY));
        assert_eq!(p.gold, None);
        assert_eq!(p.index, None);
    }

    #[test]
    fn valid_pair_requires_both_series() {
        assert_eq!(
            PricePoint::new(day(1), Some(1.0), Some(2.0)).valid_pair(),
            Some((1.0, 2.0))
        );
        assert_eq!(PricePoint::new(day(1), Some(1.0), None).valid_pair(), None);
        assert_eq!(PricePoint::new(day(1), None, Some(2.0)).valid_pair(), None);
    }

    #[test]
    fn struct_literal_cannot_leak_non_finite_values() {
        let p = PricePoint {
            date: day(3),
            gold: Some(f64::INFINITY),
            index: Some(f64::NAN),
        };
        assert_eq!(p.value(Series::Gold), None);
        assert_eq!(p.value(Series::Index), None);
        assert_eq!(p.valid_pair(), None);
    }

    #[test]
    fn zero_is_a_value_not_a_gap() {
        let p = PricePoint::new(day(2), Some(0.0), None);
        assert_eq!(p.value(Series::Gold), Some(0.0));
        assert_eq!(p.value(Series::Index), None);
    }
}
