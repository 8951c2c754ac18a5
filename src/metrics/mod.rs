//! Basic session metrics.
//!
//! Counts the commands handled during a session and how long they took. The
//! summary is written to the log when the session ends.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector for a single assistant session.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total number of known commands handled
    commands_total: AtomicU64,

    /// Commands that ended in an error reply
    command_errors_total: AtomicU64,

    /// Lines whose first word was not a known command
    unknown_commands_total: AtomicU64,

    /// Total time spent handling commands in microseconds
    command_duration_total_us: AtomicU64,

    /// Records created by `add`
    contacts_created_total: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a handled command with duration.
    pub fn record_command(&self, duration: Duration) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
        self.command_duration_total_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a command that failed.
    pub fn record_command_error(&self) {
        self.command_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an unrecognized command.
    pub fn record_unknown_command(&self) {
        self.unknown_commands_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a newly created contact.
    pub fn record_contact_created(&self) {
        self.contacts_created_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total commands handled.
    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    /// Get total failed commands.
    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total.load(Ordering::Relaxed)
    }

    /// Get total unknown commands.
    pub fn unknown_commands_total(&self) -> u64 {
        self.unknown_commands_total.load(Ordering::Relaxed)
    }

    /// Get total contacts created.
    pub fn contacts_created_total(&self) -> u64 {
        self.contacts_created_total.load(Ordering::Relaxed)
    }

    /// Get average command duration in microseconds.
    pub fn command_duration_avg_us(&self) -> f64 {
        let total = self.command_duration_total_us.load(Ordering::Relaxed);
        let count = self.commands_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total(),
            command_errors_total: self.command_errors_total(),
            unknown_commands_total: self.unknown_commands_total(),
            contacts_created_total: self.contacts_created_total(),
            command_duration_avg_us: self.command_duration_avg_us(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub command_errors_total: u64,
    pub unknown_commands_total: u64,
    pub contacts_created_total: u64,
    pub command_duration_avg_us: f64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} commands ({} failed), {} unknown, {} contacts created, avg {:.1}us",
            self.commands_total,
            self.command_errors_total,
            self.unknown_commands_total,
            self.contacts_created_total,
            self.command_duration_avg_us
        )
    }
}

/// Helper for timing a single command.
pub struct CommandTimer<'a> {
    start: Instant,
    metrics: &'a Metrics,
}

impl<'a> CommandTimer<'a> {
    /// Start timing a command.
    pub fn new(metrics: &'a Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_command(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_command(self.start.elapsed());
        self.metrics.record_command_error();
    }
}
