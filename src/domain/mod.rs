// Domain types and value objects
pub mod dataset;
pub mod date_range;
pub mod price_point;

// Re-export commonly used types
pub use dataset::{Dataset, DatasetInfo, Frequency};
pub use date_range::{DateRange, Preset};
pub use price_point::{PricePoint, Series};
