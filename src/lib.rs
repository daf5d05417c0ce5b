#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use domain::{Dataset, DatasetInfo, DateRange, Preset, PricePoint, Series};
pub use engine::{AnalysisRequest, ComparisonEngine, ComparisonReport, analyse};
pub use models::{CorrelationSummary, PerformanceSummary, RollingPoint};

// CLI argument parsing
use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::config::ANALYSIS;
use crate::utils::TimeUtils;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding a serialized dataset
    #[arg(long)]
    pub data: PathBuf,

    /// Canned range: custom, 1y, 5y, 10y, 20y, 2000, 1980 or all
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub preset: Option<Preset>,

    /// First date to include (YYYY-MM-DD), defaults to the start of the data
    #[arg(long, value_parser = TimeUtils::parse_date)]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD), defaults to the end of the data
    #[arg(long, value_parser = TimeUtils::parse_date)]
    pub to: Option<NaiveDate>,

    /// Rolling correlation window, in data points
    #[arg(long, default_value_t = ANALYSIS.rolling.default_window)]
    pub window: usize,

    /// Pretty-print the JSON report
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Cli {
    /// The requested range, kept inside the dataset's own span.
    pub fn resolve_range(&self, bounds: &DateRange) -> Result<DateRange> {
        if self.from.is_none() && self.to.is_none() {
            return Ok(self.preset.unwrap_or_default().resolve(bounds));
        }
        let range = DateRange::new(self.from.unwrap_or(bounds.from), self.to.unwrap_or(bounds.to));
        if range.is_inverted() {
            bail!("--from {} is after --to {}", range.from, range.to);
        }
        Ok(range.clamp_to(bounds))
    }
}
