//! US recession periods (NBER business-cycle dates) shaded behind the charts.
//!
//! Static data. Reports list the periods that overlap their range; no
//! calculation depends on it.

use chrono::NaiveDate;

use crate::domain::DateRange;
use crate::utils::TimeUtils;

pub struct RecessionPeriod {
    pub label: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl RecessionPeriod {
    pub fn range(&self) -> Option<DateRange> {
        let start = NaiveDate::parse_from_str(self.start, TimeUtils::STANDARD_DATE_FORMAT).ok()?;
        let end = NaiveDate::parse_from_str(self.end, TimeUtils::STANDARD_DATE_FORMAT).ok()?;
        Some(DateRange::new(start, end))
    }
}

pub const RECESSION_PERIODS: &[RecessionPeriod] = &[
    RecessionPeriod { label: "1973-75 Oil Crisis", start: "1973-11-01", end: "1975-03-31" },
    RecessionPeriod { label: "1980 Recession", start: "1980-01-01", end: "1980-07-31" },
    RecessionPeriod { label: "1981-82 Recession", start: "1981-07-01", end: "1982-11-30" },
    RecessionPeriod { label: "1990-91 Recession", start: "1990-07-01", end: "1991-03-31" },
    RecessionPeriod { label: "2001 Dot-com", start: "2001-03-01", end: "2001-11-30" },
    RecessionPeriod { label: "2007-09 Financial Crisis", start: "2007-12-01", end: "2009-06-30" },
    RecessionPeriod { label: "2020 COVID-19", start: "2020-02-01", end: "2020-04-30" },
];

/// Recessions overlapping `range`, each clipped to it.
pub fn recessions_within(range: &DateRange) -> Vec<(&'static str, DateRange)> {
    RECESSION_PERIODS
        .iter()
        .filter_map(|period| {
            let full = period.range()?;
            full.overlaps(range)
                .then(|| (period.label, full.clamp_to(range)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_period_parses_and_is_ordered() {
        for period in RECESSION_PERIODS {
            let r = period.range().expect(period.label);
            assert!(!r.is_inverted(), "{}", period.label);
        }
        for pair in RECESSION_PERIODS.windows(2) {
            assert!(pair[0].range().unwrap().to < pair[1].range().unwrap().from);
        }
    }

    #[test]
    fn within_clips_to_the_selection() {
        let selection = DateRange::new(ymd(2008, 1, 1), ymd(2021, 1, 1));
        let hits = recessions_within(&selection);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].1.from, ymd(2008, 1, 1));
        assert_eq!(hits[0].1.to, ymd(2009, 6, 30));
        assert_eq!(hits[1].0, "2020 COVID-19");

        let quiet = DateRange::new(ymd(2010, 1, 1), ymd(2019, 12, 31));
        assert!(recessions_within(&quiet).is_empty());
    }
}
