//! Configuration module for the gold vs equities engine.

pub mod analysis;
pub mod recessions;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, RollingWindowOption};
pub use recessions::{RECESSION_PERIODS, RecessionPeriod, recessions_within};
