//! The aligned gold / index dataset and its pass-through metadata.
//!
//! The analytics functions assume the points are sorted ascending by date with
//! unique dates. That invariant is established once, here, by the checked
//! constructors, and never re-derived on each analysis call.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::date_range::DateRange;
use crate::domain::price_point::PricePoint;
use crate::utils::TimeUtils;

/// Sampling frequency of the dataset, as shown next to the data range.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize, strum_macros::Display)]
pub enum Frequency {
    Daily,
    Monthly,
}

/// Metadata about where the dataset came from.
/// Carried through untouched; never an input to any calculation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DatasetInfo {
    pub source_name: String,
    pub modified: Option<NaiveDateTime>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub total: usize,
}

impl DatasetInfo {
    /// Monthly if the calendar-month span exceeds half the record count.
    pub fn frequency(&self) -> Option<Frequency> {
        let (min, max) = (self.min_date?, self.max_date?);
        let months = TimeUtils::calendar_months_between(min, max);
        if months as f64 > self.total as f64 / 2.0 {
            Some(Frequency::Monthly)
        } else {
            Some(Frequency::Daily)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Dataset {
    pub info: DatasetInfo,
    points: Vec<PricePoint>,
}

impl Dataset {
    /// Build a dataset from points that must already be strictly ascending by date.
    pub fn new(source_name: impl Into<String>, points: Vec<PricePoint>) -> Result<Self> {
        check_order(&points)?;

        let info = DatasetInfo {
            source_name: source_name.into(),
            modified: None,
            min_date: points.first().map(|p| p.date),
            max_date: points.last().map(|p| p.date),
            total: points.len(),
        };

        Ok(Dataset { info, points })
    }

    /// Sort by date first, then apply the same checks as [`Dataset::new`].
    pub fn from_unsorted(source_name: impl Into<String>, mut points: Vec<PricePoint>) -> Result<Self> {
        points.sort_by_key(|p| p.date);
        Self::new(source_name, points)
    }

    pub fn with_modified(mut self, modified: NaiveDateTime) -> Self {
        self.info.modified = Some(modified);
        self
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Full span of the data, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<DateRange> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some(DateRange::new(first.date, last.date)),
            _ => None,
        }
    }

    /// Re-check the ordering invariant. Needed after deserializing, which bypasses `new`.
    pub fn validate(&self) -> Result<()> {
        check_order(&self.points)
    }
}

fn check_order(points: &[PricePoint]) -> Result<()> {
    if let Some(pos) = points.windows(2).position(|w| w[0].date >= w[1].date) {
        let (a, b) = (points[pos].date, points[pos + 1].date);
        if a == b {
            bail!("Duplicate date {} at rows {} and {}", a, pos, pos + 1);
        }
        bail!(
            "Dataset is not sorted: {} (row {}) comes before {} (row {})",
            a,
            pos,
            b,
            pos + 1
        );
    }
    Ok(())
}
