//! Configuration and logging constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name, looked up in the current directory
pub const DEFAULT_CONFIG_FILENAME: &str = "ukit.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "UKIT";

/// Separator between nested keys in environment variable names
///
/// Double underscore so single underscores stay inside field names
/// (`UKIT_STOPWATCH__TRACE_EVENTS`).
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "UKIT_LOG";
