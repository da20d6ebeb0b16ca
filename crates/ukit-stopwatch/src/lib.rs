//! # Stopwatch
//!
//! Named multi-timer for measuring elapsed time across repeated, possibly
//! interleaved steps. One [`Stopwatch`] owns a registry of timers keyed by
//! name; every operation takes the registry lock for its whole duration, so a
//! single instance can be shared across threads behind an `Arc` or a scoped
//! borrow.
//!
//! Unknown names never fail: queries return zero and stops are no-ops.
//!
//! ## Example
//!
//! ```
//! use ukit_stopwatch::Stopwatch;
//!
//! let stopwatch = Stopwatch::new();
//!
//! stopwatch.start("load");
//! // ... work ...
//! stopwatch.stop("load");
//!
//! let parsed = stopwatch.measure("parse", || 40 + 2);
//! assert_eq!(parsed, 42);
//!
//! let report = stopwatch.stats();
//! assert!(report.starts_with("Stopwatch Results:\n  load: "));
//! ```

pub mod config;
pub mod constants;
mod registry;
pub mod report;
mod stopwatch;

pub use config::{DurationPrecision, StopwatchConfig};
pub use report::{ReportEntry, StopwatchReport, TimerStats};
pub use stopwatch::{StepGuard, Stopwatch};
