//! Sequential line pipeline
//!
//! One pass, one thread: lines are consumed in arrival order, each
//! record depends only on the substitution state accumulated from the
//! records before it, and output order equals input order. The first
//! bad line aborts the run; there is no skip-and-continue policy.

use crate::anonymization::AnonymizationEngine;
use crate::core::stream::summary::RunSummary;
use crate::domain::record::{LikeAction, LikeRecord};
use crate::domain::{AtveilError, Result};
use std::io::{BufRead, Write};

/// Drives input lines through the anonymization engine
///
/// The processor owns the engine, so several input sources processed
/// back to back share one substitution table, exactly the semantics
/// of concatenating the sources into a single stream.
pub struct StreamProcessor {
    engine: AnonymizationEngine,
    dry_run: bool,
    summary: RunSummary,
}

impl StreamProcessor {
    /// Creates a processor around a configured engine
    pub fn new(engine: AnonymizationEngine, dry_run: bool) -> Self {
        Self {
            engine,
            dry_run,
            summary: RunSummary::new(),
        }
    }

    /// Processes one input source to completion
    ///
    /// Emits one output line per input line (suppressed in dry-run
    /// mode; the substitution table is still updated). Line numbers in
    /// errors are 1-based and local to this source.
    ///
    /// # Errors
    ///
    /// Returns the first decode, transform, or I/O error encountered;
    /// the run must not continue past it.
    pub fn process<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        for (index, line) in reader.lines().enumerate() {
            let number = index as u64 + 1;
            let line = line?;

            let record =
                LikeRecord::parse(&line).map_err(|e| AtveilError::at_line(number, e))?;
            let output = self
                .engine
                .transform(&record)
                .map_err(|e| AtveilError::at_line(number, e))?;

            match record.action {
                LikeAction::Create => self.summary.creates += 1,
                LikeAction::Delete => self.summary.deletes += 1,
            }
            self.summary.lines += 1;

            if !self.dry_run {
                writeln!(writer, "{}", output)?;
            }

            if self.summary.lines % 100_000 == 0 {
                tracing::debug!(lines = self.summary.lines, "Processing stream");
            }
        }

        Ok(())
    }

    /// Finishes the run and returns the completed summary
    pub fn finish(mut self) -> RunSummary {
        self.summary.complete(self.engine.distinct_actors());
        self.summary
    }
}
