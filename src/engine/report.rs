use serde::Serialize;

use crate::domain::{DatasetInfo, DateRange};
use crate::models::{CorrelationSummary, NormalizedPoint, PerformanceSummary, RollingPoint, RollingStats};

/// A recession that overlaps the analysed range, clipped to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecessionOverlap {
    pub label: &'static str,
    pub range: DateRange,
}

/// Everything computed for one `AnalysisRequest`.
///
/// `performance` and `correlation` are `None` when the selection is too small
/// for them; the series are empty in the same situation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub info: DatasetInfo,
    pub range: DateRange,
    pub window: usize,
    pub window_label: Option<&'static str>,
    pub selection_len: usize,
    pub valid_pairs: usize,
    pub performance: Option<PerformanceSummary>,
    pub normalized: Vec<NormalizedPoint>,
    pub correlation: Option<CorrelationSummary>,
    pub significant: Option<bool>,
    pub relationship: Option<String>,
    pub rolling: Vec<RollingPoint>,
    pub rolling_stats: Option<RollingStats>,
    pub recessions: Vec<RecessionOverlap>,
}
