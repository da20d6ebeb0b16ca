//! Timer bookkeeping behind the stopwatch lock
//!
//! Nothing here synchronizes; [`crate::Stopwatch`] owns the single `Mutex`
//! and hands a `&mut Registry` to these methods. Callers pass `now` in so a
//! whole operation observes one instant.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

use crate::config::DurationPrecision;
use crate::report::{ReportEntry, StopwatchReport, TimerStats, average};

/// One named accumulator
#[derive(Debug, Clone, Default)]
pub(crate) struct Timer {
    /// Sum of every folded interval
    duration: Duration,
    /// Start of the current run; `Some` while running
    started_at: Option<Instant>,
    /// Completed running -> stopped transitions
    count: u64,
}

impl Timer {
    /// Begin a run at `now`, folding any in-progress interval first.
    ///
    /// Returns the folded interval when the timer was already running.
    pub(crate) fn start(&mut self, now: Instant) -> Option<Duration> {
        let folded = self.started_at.map(|started| {
            let elapsed = now.saturating_duration_since(started);
            self.duration += elapsed;
            elapsed
        });
        self.started_at = Some(now);
        folded
    }

    /// End the current run and return the new accumulated total.
    ///
    /// `None` if the timer was not running; state is left untouched.
    pub(crate) fn stop(&mut self, now: Instant) -> Option<Duration> {
        let started = self.started_at.take()?;
        self.duration += now.saturating_duration_since(started);
        self.count += 1;
        Some(self.duration)
    }

    /// Accumulated duration plus the live interval, without committing it
    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started) => self.duration + now.saturating_duration_since(started),
            None => self.duration,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub(crate) fn stats(&self, now: Instant) -> TimerStats {
        let total = self.elapsed(now);
        TimerStats {
            count: self.count,
            total,
            average: average(total, self.count),
        }
    }
}

/// Timers keyed by name plus their first-registration order
#[derive(Debug, Default)]
pub(crate) struct Registry {
    timers: HashMap<String, Timer>,
    order: Vec<String>,
}

impl Registry {
    pub(crate) fn get(&self, name: &str) -> Option<&Timer> {
        self.timers.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Timer> {
        self.timers.get_mut(name)
    }

    /// Look up `name`, registering it on first use.
    ///
    /// A name is appended to the order list only when it is first inserted.
    pub(crate) fn get_or_register(&mut self, name: &str) -> &mut Timer {
        match self.timers.entry(name.to_owned()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(name.to_owned());
                entry.insert(Timer::default())
            }
        }
    }

    /// Stop every running timer and map every name to its total.
    pub(crate) fn stop_all(&mut self, now: Instant) -> HashMap<String, Duration> {
        self.timers
            .iter_mut()
            .map(|(name, timer)| {
                timer.stop(now);
                (name.clone(), timer.duration)
            })
            .collect()
    }

    /// Drop every timer and the order list together.
    pub(crate) fn clear(&mut self) {
        self.timers.clear();
        self.order.clear();
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.order
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Finalize every timer and snapshot them in registration order.
    pub(crate) fn finalize_report(
        &mut self,
        now: Instant,
        precision: DurationPrecision,
    ) -> StopwatchReport {
        self.stop_all(now);
        let entries = self
            .order
            .iter()
            .filter_map(|name| {
                self.timers.get(name).map(|timer| ReportEntry {
                    name: name.clone(),
                    count: timer.count,
                    total: timer.duration,
                    average: average(timer.duration, timer.count),
                })
            })
            .collect();
        StopwatchReport::new(entries, precision)
    }
}
