use anyhow::{Result, bail};

use crate::config::ANALYSIS;
use crate::domain::{Dataset, DateRange, Preset};

/// One analysis to run: which dates, and how wide the rolling window is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub range: DateRange,
    pub window: usize,
}

impl AnalysisRequest {
    pub fn new(range: DateRange, window: usize) -> Result<Self> {
        if range.is_inverted() {
            bail!("Invalid date range: start {} is after end {}", range.from, range.to);
        }
        if window == 0 || window > ANALYSIS.rolling.max_window {
            bail!(
                "Rolling window must be between 1 and {} points, got {}",
                ANALYSIS.rolling.max_window,
                window
            );
        }
        Ok(Self { range, window })
    }

    /// Resolve a preset against the dataset's own date span.
    pub fn from_preset(preset: Preset, dataset: &Dataset, window: usize) -> Result<Self> {
        let Some(bounds) = dataset.date_bounds() else {
            bail!("Dataset '{}' has no points", dataset.info.source_name);
        };
        Self::new(preset.resolve(&bounds), window)
    }
}
