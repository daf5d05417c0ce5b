use std::sync::Arc;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::config::{ANALYSIS, recessions_within};
use crate::domain::{Dataset, Preset};

use crate::analysis::{
    calculate_correlation, calculate_performance, normalize_series, rolling_correlation, rolling_stats,
};

use super::report::{ComparisonReport, RecessionOverlap};
use super::request::AnalysisRequest;

/// Filter the dataset once, then run every calculator over the selection.
pub fn analyse(dataset: &Dataset, request: &AnalysisRequest) -> ComparisonReport {
    let selection = dataset.select(request.range);
    let points = selection.points();

    let performance = if selection.len() >= ANALYSIS.min_points.performance {
        calculate_performance(points)
    } else {
        None
    };

    let correlation =
        (selection.len() >= ANALYSIS.min_points.correlation).then(|| calculate_correlation(points));
    let significant = correlation
        .as_ref()
        .and_then(|c| c.is_significant(ANALYSIS.correlation.significance_level));
    let relationship = correlation.as_ref().and_then(|c| c.relationship());

    let rolling = rolling_correlation(points, request.window);
    let stats = rolling_stats(&rolling);

    let recessions = recessions_within(&request.range)
        .into_iter()
        .map(|(label, range)| RecessionOverlap { label, range })
        .collect();

    let report = ComparisonReport {
        info: dataset.info.clone(),
        range: request.range,
        window: request.window,
        window_label: ANALYSIS.window_label(request.window),
        selection_len: selection.len(),
        valid_pairs: selection.valid_pair_count(),
        performance,
        normalized: normalize_series(points),
        correlation,
        significant,
        relationship,
        rolling,
        rolling_stats: stats,
        recessions,
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_report_summary {
        log::info!(
            "Report {}: {} points, verdict {}, r {:?}, {} rolling values",
            report.range,
            report.selection_len,
            report
                .performance
                .as_ref()
                .map_or("n/a".to_string(), |p| p.verdict.to_string()),
            report.correlation.as_ref().and_then(|c| c.r),
            report.rolling.len()
        );
    }

    report
}

/// Owns a validated dataset and answers repeated analysis requests against it.
pub struct ComparisonEngine {
    /// Shared immutable data
    pub dataset: Arc<Dataset>,
}

impl ComparisonEngine {
    pub fn new(dataset: Dataset) -> anyhow::Result<Self> {
        dataset.validate()?;
        Ok(Self {
            dataset: Arc::new(dataset),
        })
    }

    pub fn request(&self, preset: Preset, window: usize) -> anyhow::Result<AnalysisRequest> {
        AnalysisRequest::from_preset(preset, &self.dataset, window)
    }

    pub fn run(&self, request: &AnalysisRequest) -> ComparisonReport {
        analyse(&self.dataset, request)
    }
}
