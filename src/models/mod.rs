// Result models produced by the analysis functions.
// Plain data: no behaviour beyond labelling, nothing here recomputes anything.

pub mod correlation;
pub mod performance;
pub mod series;

// Re-export key types for convenience
pub use correlation::{CorrelationDirection, CorrelationStrength, CorrelationSummary};
pub use performance::{PerformanceSummary, SeriesPerformance, Verdict};
pub use series::{NormalizedPoint, RollingPoint, RollingStats};
