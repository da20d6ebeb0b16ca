//! Application configuration
//!
//! [`AppConfig`] groups the logging and stopwatch sections; [`ConfigLoader`]
//! layers defaults, a TOML file and `UKIT_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig};
pub use ukit_stopwatch::{DurationPrecision, StopwatchConfig};
