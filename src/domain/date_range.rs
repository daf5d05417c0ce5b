use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive `[from, to]` calendar interval.
/// `from > to` is allowed and simply selects nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// True if the two inclusive intervals share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !self.is_inverted()
            && !other.is_inverted()
            && self.from <= other.to
            && other.from <= self.to
    }

    /// Clamp both ends into `bounds`. Used to keep user-picked dates inside the data span.
    pub fn clamp_to(&self, bounds: &DateRange) -> DateRange {
        DateRange {
            from: clamp_date(self.from, bounds),
            to: clamp_date(self.to, bounds),
        }
    }
}

fn clamp_date(date: NaiveDate, bounds: &DateRange) -> NaiveDate {
    if date < bounds.from {
        bounds.from
    } else if date > bounds.to {
        bounds.to
    } else {
        date
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Canned date ranges offered next to the custom date picker.
///
/// `FromStr` accepts either the short code (`"5y"`) or the label (`"Last 5 Years"`).
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
)]
pub enum Preset {
    #[strum(to_string = "Custom", serialize = "custom")]
    Custom,
    #[strum(to_string = "Last 1 Year", serialize = "1y")]
    LastYear,
    #[strum(to_string = "Last 5 Years", serialize = "5y")]
    LastFiveYears,
    #[strum(to_string = "Last 10 Years", serialize = "10y")]
    LastTenYears,
    #[strum(to_string = "Last 20 Years", serialize = "20y")]
    LastTwentyYears,
    #[strum(to_string = "Since 2000", serialize = "2000")]
    Since2000,
    #[strum(to_string = "Since 1980", serialize = "1980")]
    Since1980,
    #[default]
    #[strum(to_string = "Since 1971 (All Data)", serialize = "all")]
    AllData,
}

impl Preset {
    pub fn code(&self) -> &'static str {
        match self {
            Preset::Custom => "custom",
            Preset::LastYear => "1y",
            Preset::LastFiveYears => "5y",
            Preset::LastTenYears => "10y",
            Preset::LastTwentyYears => "20y",
            Preset::Since2000 => "2000",
            Preset::Since1980 => "1980",
            Preset::AllData => "all",
        }
    }

    /// Turn the preset into a concrete range inside `bounds` (the dataset's full span).
    ///
    /// Look-back presets count whole years back from the last available date;
    /// `Custom` falls back to the full span until the caller supplies its own dates.
    pub fn resolve(&self, bounds: &DateRange) -> DateRange {
        let from = match self {
            Preset::LastYear => years_before(bounds.to, 1),
            Preset::LastFiveYears => years_before(bounds.to, 5),
            Preset::LastTenYears => years_before(bounds.to, 10),
            Preset::LastTwentyYears => years_before(bounds.to, 20),
            Preset::Since2000 => NaiveDate::from_ymd_opt(2000, 1, 1),
            Preset::Since1980 => NaiveDate::from_ymd_opt(1980, 1, 1),
            Preset::AllData | Preset::Custom => Some(bounds.from),
        }
        .unwrap_or(bounds.from);

        DateRange::new(from, bounds.to).clamp_to(bounds)
    }
}

fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(years * 12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds() -> DateRange {
        DateRange::new(ymd(1971, 1, 1), ymd(2024, 6, 30))
    }

    #[test]
    fn look_back_presets_count_back_from_last_date() {
        assert_eq!(Preset::LastYear.resolve(&bounds()).from, ymd(2023, 6, 30));
        assert_eq!(Preset::LastTwentyYears.resolve(&bounds()).from, ymd(2004, 6, 30));
        assert_eq!(Preset::LastYear.resolve(&bounds()).to, ymd(2024, 6, 30));
    }

    #[test]
    fn presets_are_clamped_to_the_data_span() {
        let short = DateRange::new(ymd(2010, 3, 1), ymd(2012, 3, 1));
        assert_eq!(Preset::LastTenYears.resolve(&short).from, ymd(2010, 3, 1));
        assert_eq!(Preset::Since2000.resolve(&short).from, ymd(2010, 3, 1));
        assert_eq!(Preset::Since1980.resolve(&bounds()).from, ymd(1980, 1, 1));
        assert_eq!(Preset::AllData.resolve(&bounds()), bounds());
        assert_eq!(Preset::Custom.resolve(&bounds()), bounds());
    }

    #[test]
    fn leap_day_look_back_lands_on_a_real_date() {
        let b = DateRange::new(ymd(1971, 1, 1), ymd(2024, 2, 29));
        assert_eq!(Preset::LastYear.resolve(&b).from, ymd(2023, 2, 28));
    }

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!(Preset::from_str("5y").unwrap(), Preset::LastFiveYears);
        assert_eq!(Preset::from_str("Since 2000").unwrap(), Preset::Since2000);
        assert!(Preset::from_str("7y").is_err());
        for preset in Preset::iter() {
            assert_eq!(Preset::from_str(preset.code()).unwrap(), preset);
        }
    }

    #[test]
    fn clamp_and_overlap() {
        let r = DateRange::new(ymd(1960, 1, 1), ymd(2030, 1, 1)).clamp_to(&bounds());
        assert_eq!(r, bounds());

        let a = DateRange::new(ymd(2000, 1, 1), ymd(2000, 12, 31));
        let b = DateRange::new(ymd(2000, 12, 31), ymd(2001, 6, 1));
        let c = DateRange::new(ymd(2001, 1, 1), ymd(2001, 6, 1));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(DateRange::new(ymd(2001, 1, 1), ymd(2000, 1, 1)).is_inverted());
    }
}
