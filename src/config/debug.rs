//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Checked together with `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit the selected range and point count every time a dataset is filtered.
    pub print_range_filter: bool,
    /// Emit per-call correlation inputs (valid pair count, variances).
    pub print_correlation_inputs: bool,
    /// Emit a line for every rolling window that has too few valid pairs.
    pub print_rolling_gaps: bool,
    /// Emit a one-line summary of each completed comparison report.
    pub print_report_summary: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_range_filter: false,
    print_correlation_inputs: false,
    print_rolling_gaps: false,
    print_report_summary: true,
};
