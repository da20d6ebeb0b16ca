//! # ukit
//!
//! Slice helpers and a named multi-timer stopwatch, plus the configuration
//! and logging glue to run them in an application.
//!
//! ## Module Categories
//!
//! ### Libraries
//! | Module | Description |
//! |--------|-------------|
//! | [`array`] | Shuffle, chunk and equality-based set operations |
//! | [`stopwatch`] | Thread-safe named multi-timer |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML/env configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error`] | Error type for configuration and logging setup |
//!
//! ## Example
//!
//! ```
//! use ukit::{Stopwatch, unique};
//!
//! let stopwatch = Stopwatch::new();
//! let ids = stopwatch.measure("dedup", || unique(&[3, 1, 3, 2]));
//! assert_eq!(ids, vec![3, 1, 2]);
//! assert_eq!(stopwatch.timer_stats("dedup").count, 1);
//! ```

/// Slice helpers
///
/// Re-exports from the array crate for convenience
pub mod array {
    pub use ukit_array::*;
}

/// Named multi-timer
///
/// Re-exports from the stopwatch crate for convenience
pub mod stopwatch {
    pub use ukit_stopwatch::*;
}

pub mod config;
pub mod constants;
pub mod error;
pub mod error_ext;
pub mod logging;

// Re-export commonly used items at the crate root
pub use array::{
    chunk, contains, difference, intersection, intersects, shuffle, shuffle_with, union, unique,
};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use error::{Error, Result};
pub use error_ext::ErrorContext;
pub use stopwatch::{StepGuard, Stopwatch, StopwatchConfig, StopwatchReport, TimerStats};
