//! Batch formatting over an abstract record source.
//!
//! The core only needs "given a string, return a string"; this module owns
//! everything around that when a whole table of records is formatted in one
//! go: iterating records, writing results back, periodic progress logging,
//! and the transactional contract that a failed batch leaves no partial
//! edits behind.

use crate::error::{Error, Result};
use log::{debug, info, warn};

/// A tabular source of raw address records.
///
/// Implementations expose one raw string per record and accept one formatted
/// string back, inside an edit session that either commits as a whole or is
/// rolled back as a whole.
pub trait RecordSource {
    /// Number of records in the source.
    fn record_count(&self) -> usize;

    /// The raw address of the record at `index`, or `None` when the record
    /// has no value to format.
    fn raw_address(&self, index: usize) -> Option<String>;

    /// Writes the formatted address into the record at `index`.
    fn write_formatted(&mut self, index: usize, formatted: &str) -> Result<()>;

    /// Opens an edit session covering the whole batch.
    fn begin_edit(&mut self) -> Result<()>;

    /// Commits every edit made during the session.
    fn commit(&mut self) -> Result<()>;

    /// Discards every edit made during the session.
    fn rollback(&mut self);
}

/// Summary of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchReport {
    /// Records visited, with or without a raw value.
    pub processed: usize,
    /// Records that had a raw value and received a formatted one.
    pub written: usize,
}

/// Drives [`crate::format_address`] over every record of a source inside a
/// single transactional edit session.
#[derive(Debug, Clone)]
pub struct BatchFormatter {
    progress_interval: usize,
}

impl BatchFormatter {
    /// Create a batch formatter reporting progress every 10 records.
    pub fn new() -> Self {
        Self {
            progress_interval: 10,
        }
    }

    /// Set how many records pass between progress log lines. Zero disables
    /// progress logging.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Formats every record of `source`.
    ///
    /// Opens an edit session, formats and writes each record that has a raw
    /// value, and commits at the end. On any failure — including a failed
    /// commit — every edit made during the session is rolled back, so the
    /// source never ends up partially formatted.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the record source.
    pub fn run<S: RecordSource>(&self, source: &mut S) -> Result<BatchReport> {
        source.begin_edit()?;

        let report = match self.format_records(source) {
            Ok(report) => report,
            Err(err) => {
                warn!("batch formatting failed, rolling back: {err}");
                source.rollback();
                return Err(err);
            }
        };

        if let Err(err) = source.commit() {
            warn!("commit failed, rolling back: {err}");
            source.rollback();
            return Err(err);
        }

        info!("formatted {} of {} records", report.written, report.processed);
        Ok(report)
    }

    fn format_records<S: RecordSource>(&self, source: &mut S) -> Result<BatchReport> {
        let total = source.record_count();
        let mut report = BatchReport::default();

        for index in 0..total {
            if let Some(raw) = source.raw_address(index) {
                let formatted = crate::format_address(&raw);
                source.write_formatted(index, &formatted)?;
                report.written += 1;
            }

            report.processed += 1;
            if self.progress_interval > 0 && report.processed % self.progress_interval == 0 {
                debug!(
                    "formatting addresses: {}%",
                    100 * report.processed / total.max(1)
                );
            }
        }

        Ok(report)
    }
}

impl Default for BatchFormatter {
    fn default() -> Self {
        Self::new()
    }
}
