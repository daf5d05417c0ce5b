use serde::{Deserialize, Serialize};
use std::fmt;

/// Start, end and percentage change of one series over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPerformance {
    pub start: f64,
    pub end: f64,
    // None when `start` is zero: the change is undefined, not infinite
    pub pct: Option<f64>,
}

/// Which series did better over the selection.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    GoldOutperformed,
    IndexOutperformed,
    Equal,
    // At least one percentage change is unavailable
    Undetermined,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::GoldOutperformed => write!(f, "Gold outperformed"),
            Verdict::IndexOutperformed => write!(f, "S&P 500 outperformed"),
            Verdict::Equal => write!(f, "Both performed equally"),
            Verdict::Undetermined => write!(f, "No comparison available"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Each side is present only if both of its endpoints are defined.
    pub gold: Option<SeriesPerformance>,
    pub index: Option<SeriesPerformance>,
    /// `gold.pct - index.pct`, signed, with no intermediate rounding.
    pub diff: Option<f64>,
    pub verdict: Verdict,
}
