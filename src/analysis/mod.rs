// Pure calculators over a date-ordered slice of price points.
pub mod correlation;
pub mod normalize;
pub mod performance;
pub mod range_filter;
pub mod rolling;

// Re-export commonly used functions
pub use correlation::{calculate_correlation, pearson, two_tailed_p_value};
pub use normalize::normalize_series;
pub use performance::calculate_performance;
pub use range_filter::{Selection, filter_by_range};
pub use rolling::{rolling_correlation, rolling_stats};
