//! Stopwatch constants

/// First line of the text report
pub const REPORT_HEADER: &str = "Stopwatch Results:";

/// Indentation applied to every timer line of the text report
pub const REPORT_INDENT: &str = "  ";

/// tracing target for stopwatch events
pub const TRACING_TARGET: &str = "ukit::stopwatch";
