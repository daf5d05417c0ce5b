use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Both series rebased to 100 at their first defined value in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub date: NaiveDate,
    pub gold_index: Option<f64>,
    pub index_index: Option<f64>,
}

/// Correlation over the trailing window that ends at `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Summary of a rolling correlation series, over its defined values only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub defined_count: usize,
}
