pub mod core;
pub mod report;
pub mod request;

// Re-export key components
pub use core::{ComparisonEngine, analyse};
pub use report::{ComparisonReport, RecessionOverlap};
pub use request::AnalysisRequest;
