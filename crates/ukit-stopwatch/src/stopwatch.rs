//! Named multi-timer registry
//!
//! Tracks elapsed time for named steps. A step can be started and stopped
//! many times; each stop adds the interval to its total and bumps its count.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::StopwatchConfig;
use crate::constants::TRACING_TARGET;
use crate::registry::{Registry, Timer};
use crate::report::{StopwatchReport, TimerStats};

/// Thread-safe named multi-timer
///
/// # Example
///
/// ```
/// use ukit_stopwatch::Stopwatch;
///
/// let stopwatch = Stopwatch::new();
/// stopwatch.start("query");
/// stopwatch.start("query"); // folds the running interval, no extra count
/// stopwatch.stop("query");
///
/// assert_eq!(stopwatch.timer_stats("query").count, 1);
/// assert_eq!(stopwatch.stop("missing"), std::time::Duration::ZERO);
/// ```
#[derive(Debug, Default)]
pub struct Stopwatch {
    registry: Mutex<Registry>,
    config: StopwatchConfig,
}

impl Stopwatch {
    /// Create an empty stopwatch with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopwatch with the given configuration
    pub fn with_config(config: StopwatchConfig) -> Self {
        Self {
            registry: Mutex::default(),
            config,
        }
    }

    pub fn config(&self) -> &StopwatchConfig {
        &self.config
    }

    /// Start (or restart) the timer for `name`.
    ///
    /// The timer is registered on first use. If it is already running the
    /// in-progress interval is folded into its total before restarting; the
    /// count is left alone.
    pub fn start(&self, name: &str) {
        let mut registry = self.lock();
        let folded = registry.get_or_register(name).start(Instant::now());
        if self.config.trace_events {
            trace!(target: TRACING_TARGET, timer = name, folded = ?folded, "timer started");
        }
    }

    /// Stop the timer for `name` and return its accumulated total.
    ///
    /// Returns zero without touching any state if `name` is unknown or not
    /// running.
    pub fn stop(&self, name: &str) -> Duration {
        let mut registry = self.lock();
        let Some(timer) = registry.get_mut(name) else {
            return Duration::ZERO;
        };
        match timer.stop(Instant::now()) {
            Some(total) => {
                if self.config.trace_events {
                    trace!(target: TRACING_TARGET, timer = name, total = ?total, "timer stopped");
                }
                total
            }
            None => Duration::ZERO,
        }
    }

    /// Stop every running timer and return the total of every registered name.
    pub fn stop_all(&self) -> HashMap<String, Duration> {
        let mut registry = self.lock();
        let totals = registry.stop_all(Instant::now());
        if self.config.trace_events {
            debug!(target: TRACING_TARGET, timers = totals.len(), "all timers stopped");
        }
        totals
    }

    /// Discard every timer and the registration order.
    pub fn reset(&self) {
        let mut registry = self.lock();
        registry.clear();
        if self.config.trace_events {
            debug!(target: TRACING_TARGET, "stopwatch reset");
        }
    }

    /// Accumulated duration for `name`, including the live interval if running.
    ///
    /// Zero for unknown names. Does not commit anything.
    pub fn duration(&self, name: &str) -> Duration {
        self.lock()
            .get(name)
            .map_or(Duration::ZERO, |timer| timer.elapsed(Instant::now()))
    }

    /// Count, total and average for `name`; all zero for unknown names.
    pub fn timer_stats(&self, name: &str) -> TimerStats {
        self.lock()
            .get(name)
            .map(|timer| timer.stats(Instant::now()))
            .unwrap_or_default()
    }

    /// Whether the timer for `name` is currently running
    pub fn is_running(&self, name: &str) -> bool {
        self.lock().get(name).is_some_and(Timer::is_running)
    }

    /// Registered names in first-registration order
    pub fn names(&self) -> Vec<String> {
        self.lock().names().to_vec()
    }

    /// Number of registered timers
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stop every running timer and snapshot all timers in registration order.
    ///
    /// Finalizing and snapshotting happen under one lock acquisition.
    pub fn report(&self) -> StopwatchReport {
        let mut registry = self.lock();
        let report = registry.finalize_report(Instant::now(), self.config.precision);
        if self.config.trace_events {
            debug!(target: TRACING_TARGET, timers = report.entries().len(), "report generated");
        }
        report
    }

    /// Text summary of every timer; see [`StopwatchReport`]'s `Display`.
    ///
    /// Stops every running timer first, like [`Stopwatch::stop_all`].
    pub fn stats(&self) -> String {
        self.report().to_string()
    }

    /// Start `name` and return a guard that stops it when dropped.
    pub fn guard(&self, name: impl Into<String>) -> StepGuard<'_> {
        let name = name.into();
        self.start(&name);
        StepGuard {
            stopwatch: self,
            name,
            stopped: false,
        }
    }

    /// Run `f` while the timer for `name` is running.
    ///
    /// The timer is stopped even if `f` unwinds.
    pub fn measure<R>(&self, name: &str, f: impl FnOnce() -> R) -> R {
        let _guard = self.guard(name);
        f()
    }

    // A panic while holding the lock cannot leave a timer half-updated.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Scope guard returned by [`Stopwatch::guard`]
#[must_use = "dropping the guard immediately stops the timer"]
#[derive(Debug)]
pub struct StepGuard<'a> {
    stopwatch: &'a Stopwatch,
    name: String,
    stopped: bool,
}

impl StepGuard<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop the timer now and return its accumulated total
    pub fn stop(mut self) -> Duration {
        self.stopped = true;
        self.stopwatch.stop(&self.name)
    }
}

impl Drop for StepGuard<'_> {
    fn drop(&mut self) {
        if !self.stopped {
            self.stopwatch.stop(&self.name);
        }
    }
}
