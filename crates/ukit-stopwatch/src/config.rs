//! Stopwatch configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest unit kept when a duration is rendered in the text report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationPrecision {
    /// Full nanosecond resolution
    Nanos,
    /// Truncate to whole microseconds
    #[default]
    Micros,
    /// Truncate to whole milliseconds
    Millis,
}

impl DurationPrecision {
    /// Drop every sub-unit below this precision
    pub fn truncate(self, duration: Duration) -> Duration {
        let secs = duration.as_secs();
        match self {
            Self::Nanos => duration,
            Self::Micros => Duration::new(secs, duration.subsec_micros() * 1_000),
            Self::Millis => Duration::new(secs, duration.subsec_millis() * 1_000_000),
        }
    }
}

/// Stopwatch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwatchConfig {
    /// Emit tracing events for start/stop/reset/report
    pub trace_events: bool,

    /// Duration precision used by the text report
    pub precision: DurationPrecision,
}
