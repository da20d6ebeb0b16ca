//! Registry Semantics Tests
//!
//! Behaviour that does not depend on wall-clock timing.

use std::time::Duration;
use ukit_stopwatch::{Stopwatch, TimerStats};

#[test]
fn test_new_stopwatch_is_empty() {
    let stopwatch = Stopwatch::new();
    assert!(stopwatch.is_empty());
    assert!(stopwatch.names().is_empty());
    assert!(stopwatch.stop_all().is_empty());
    assert_eq!(stopwatch.stats(), "Stopwatch Results:\n");
}

#[test]
fn test_unknown_names_degrade_to_zero() {
    let stopwatch = Stopwatch::new();
    assert_eq!(stopwatch.stop("missing"), Duration::ZERO);
    assert_eq!(stopwatch.duration("missing"), Duration::ZERO);
    assert_eq!(stopwatch.timer_stats("missing"), TimerStats::default());
    assert!(!stopwatch.is_running("missing"));
    assert!(stopwatch.is_empty());
}

#[test]
fn test_stop_already_stopped_is_noop() {
    let stopwatch = Stopwatch::new();
    stopwatch.start("step");
    let total = stopwatch.stop("step");

    assert_eq!(stopwatch.stop("step"), Duration::ZERO);
    let stats = stopwatch.timer_stats("step");
    assert_eq!(stats.count, 1);
    assert_eq!(stats.total, total);
}

#[test]
fn test_names_follow_first_start() {
    let stopwatch = Stopwatch::new();
    stopwatch.start("c");
    stopwatch.start("a");
    stopwatch.start("c");
    stopwatch.start("b");

    assert_eq!(stopwatch.names(), vec!["c", "a", "b"]);
    assert_eq!(stopwatch.len(), 3);
}

#[test]
fn test_is_running_transitions() {
    let stopwatch = Stopwatch::new();
    stopwatch.start("step");
    assert!(stopwatch.is_running("step"));
    stopwatch.stop("step");
    assert!(!stopwatch.is_running("step"));
}

#[test]
fn test_reset_clears_timers_and_order() {
    let stopwatch = Stopwatch::new();
    stopwatch.start("a");
    stopwatch.start("b");
    stopwatch.stop("a");

    stopwatch.reset();

    assert!(stopwatch.stop_all().is_empty());
    assert!(stopwatch.names().is_empty());
    assert_eq!(stopwatch.timer_stats("a"), TimerStats::default());

    stopwatch.start("b");
    assert_eq!(stopwatch.names(), vec!["b"]);
}

#[test]
fn test_stop_all_reports_every_name() {
    let stopwatch = Stopwatch::new();
    stopwatch.start("idle");
    stopwatch.stop("idle");
    stopwatch.start("busy");

    let totals = stopwatch.stop_all();

    assert_eq!(totals.len(), 2);
    assert!(totals.contains_key("idle"));
    assert!(totals.contains_key("busy"));
    assert_eq!(stopwatch.timer_stats("idle").count, 1);
    assert_eq!(stopwatch.timer_stats("busy").count, 1);
    assert!(!stopwatch.is_running("busy"));
}

#[test]
fn test_guard_stops_on_drop() {
    let stopwatch = Stopwatch::new();
    {
        let guard = stopwatch.guard("scoped");
        assert_eq!(guard.name(), "scoped");
        assert!(stopwatch.is_running("scoped"));
    }
    assert!(!stopwatch.is_running("scoped"));
    assert_eq!(stopwatch.timer_stats("scoped").count, 1);
}

#[test]
fn test_guard_explicit_stop_counts_once() {
    let stopwatch = Stopwatch::new();
    let guard = stopwatch.guard("early");
    let total = guard.stop();

    let stats = stopwatch.timer_stats("early");
    assert_eq!(stats.count, 1);
    assert_eq!(stats.total, total);
}

#[test]
fn test_measure_returns_closure_value() {
    let stopwatch = Stopwatch::new();
    let value = stopwatch.measure("compute", || "done");

    assert_eq!(value, "done");
    assert_eq!(stopwatch.timer_stats("compute").count, 1);
    assert!(!stopwatch.is_running("compute"));
}

#[test]
fn test_measure_stops_timer_on_panic() {
    let stopwatch = Stopwatch::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        stopwatch.measure("explodes", || -> u32 { panic!("boom") })
    }));

    assert!(result.is_err());
    assert!(!stopwatch.is_running("explodes"));
    assert_eq!(stopwatch.timer_stats("explodes").count, 1);
}
