//! Run summary and reporting
//!
//! This module defines the structure for tracking and reporting the
//! result of one anonymization run.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Summary of an anonymization run
///
/// A run is fail-fast, so a summary is only produced for runs that
/// consumed their entire input.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Total number of input lines consumed
    pub lines: u64,

    /// Number of create records
    pub creates: u64,

    /// Number of delete records
    pub deletes: u64,

    /// Number of distinct real DIDs substituted
    pub distinct_actors: usize,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a new empty run summary stamped with the current time
    pub fn new() -> Self {
        Self {
            lines: 0,
            creates: 0,
            deletes: 0,
            distinct_actors: 0,
            started_at: Utc::now(),
            completed_at: None,
            duration: Duration::from_secs(0),
        }
    }

    /// Stamp the completion time and derive the duration
    pub fn complete(&mut self, distinct_actors: usize) {
        let now = Utc::now();
        self.distinct_actors = distinct_actors;
        self.duration = (now - self.started_at).to_std().unwrap_or_default();
        self.completed_at = Some(now);
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            lines = self.lines,
            creates = self.creates,
            deletes = self.deletes,
            distinct_actors = self.distinct_actors,
            duration_ms = self.duration.as_millis() as u64,
            "Run completed"
        );
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
