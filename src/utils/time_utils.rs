use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    // Long form used in range captions, e.g. "Jan 5, 2021"
    pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

    pub fn parse_date(text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), Self::STANDARD_DATE_FORMAT)
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text))
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::DISPLAY_DATE_FORMAT).to_string()
    }

    /// Whole calendar months from `from` to `to`, ignoring the day of month.
    /// Negative if `to` is earlier.
    pub fn calendar_months_between(from: NaiveDate, to: NaiveDate) -> i64 {
        (to.year() - from.year()) as i64 * 12 + to.month() as i64 - from.month() as i64
    }
}
