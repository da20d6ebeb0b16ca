//! Logging Tests

use tracing::Level;
use ukit::constants::DEFAULT_LOG_LEVEL;
use ukit::logging::{LoggingConfig, init_logging, parse_log_level};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("ERROR").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        json_format: false,
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_only_once() {
    // The global subscriber can be installed once per process; whichever
    // call wins, a repeat must report an error rather than panic.
    let config = LoggingConfig::default();
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
