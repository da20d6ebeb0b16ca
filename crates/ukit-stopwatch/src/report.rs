//! Timer statistics and the stopwatch report
//!
//! [`StopwatchReport`] renders the text summary through `Display` and the
//! JSON form through serde. Durations are serialized as integer nanoseconds.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

use crate::config::DurationPrecision;
use crate::constants::{REPORT_HEADER, REPORT_INDENT};

/// Per-timer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimerStats {
    /// Completed start/stop cycles
    pub count: u64,
    /// Accumulated duration, including the live interval if running
    #[serde(rename = "total_ns", serialize_with = "serialize_nanos")]
    pub total: Duration,
    /// `total / count`, or zero when `count` is zero
    #[serde(rename = "average_ns", serialize_with = "serialize_nanos")]
    pub average: Duration,
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Timer name
    pub name: String,
    /// Completed start/stop cycles
    pub count: u64,
    /// Accumulated duration
    #[serde(rename = "total_ns", serialize_with = "serialize_nanos")]
    pub total: Duration,
    /// `total / count`, or zero when `count` is zero
    #[serde(rename = "average_ns", serialize_with = "serialize_nanos")]
    pub average: Duration,
}

/// Snapshot of every timer, in first-registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchReport {
    #[serde(rename = "timers")]
    entries: Vec<ReportEntry>,
    #[serde(skip)]
    precision: DurationPrecision,
}

impl StopwatchReport {
    pub(crate) fn new(entries: Vec<ReportEntry>, precision: DurationPrecision) -> Self {
        Self { entries, precision }
    }

    /// Entries in first-registration order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Find the entry for `name`
    pub fn entry(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as `{"timers":[{"name":..,"count":..,"total_ns":..,"average_ns":..}]}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn render(&self, duration: Duration) -> String {
        format_duration(duration, self.precision)
    }
}

impl fmt::Display for StopwatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for entry in &self.entries {
            if entry.count <= 1 {
                writeln!(
                    f,
                    "{REPORT_INDENT}{}: {}",
                    entry.name,
                    self.render(entry.total)
                )?;
            } else {
                writeln!(
                    f,
                    "{REPORT_INDENT}{}: count={}, total={}, avg={}",
                    entry.name,
                    entry.count,
                    self.render(entry.total),
                    self.render(entry.average)
                )?;
            }
        }
        Ok(())
    }
}

/// Render `duration` with humantime after truncating to `precision`.
///
/// Zero renders as `0s`.
pub fn format_duration(duration: Duration, precision: DurationPrecision) -> String {
    humantime::format_duration(precision.truncate(duration)).to_string()
}

/// `total / count` with integer-nanosecond truncation; zero when `count` is zero
pub(crate) fn average(total: Duration, count: u64) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / u128::from(count);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
}
