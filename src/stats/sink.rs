use std::num::NonZeroUsize;

use tracing::{debug, warn};

use crate::error::AppResult;
use crate::types::PositiveUsize;

use super::record::MetricRecord;
use super::writer::StatsWriter;

/// Flush threshold used when the caller does not specify one.
pub const DEFAULT_BUFFER_LIMIT: PositiveUsize = match NonZeroUsize::new(10) {
    Some(limit) => PositiveUsize::from_nonzero(limit),
    None => PositiveUsize::MIN,
};

/// Buffered counter sink.
///
/// `incr`/`decr` calls append timestamped records to an in-memory buffer;
/// the buffer is written to the backend in insertion order once it reaches
/// the configured threshold, on an explicit [`Statsd::flush`], or as a
/// best-effort final flush on drop. One sink owns its buffer exclusively
/// and is not meant to be shared across threads.
#[derive(Debug)]
pub struct Statsd {
    writer: StatsWriter,
    buffer: Vec<MetricRecord>,
    buffer_limit: PositiveUsize,
}

impl Statsd {
    #[must_use]
    pub const fn new(writer: StatsWriter, buffer_limit: PositiveUsize) -> Self {
        Self {
            writer,
            buffer: Vec::new(),
            buffer_limit,
        }
    }

    /// Creates a sink with [`DEFAULT_BUFFER_LIMIT`].
    #[must_use]
    pub const fn with_default_limit(writer: StatsWriter) -> Self {
        Self::new(writer, DEFAULT_BUFFER_LIMIT)
    }

    /// Runs `f` against a fresh sink and guarantees a final flush on every
    /// exit path, including early returns from `f`.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error first; a flush failure after a
    /// closure error is logged, not returned. On a successful closure the
    /// final flush error, if any, is returned.
    pub fn scoped<F, R>(writer: StatsWriter, buffer_limit: PositiveUsize, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Self) -> AppResult<R>,
    {
        let mut sink = Self::new(writer, buffer_limit);
        match f(&mut sink) {
            Ok(value) => {
                sink.flush()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(flush_err) = sink.flush() {
                    warn!("Final flush failed after scope error: {}", flush_err);
                }
                Err(err)
            }
        }
    }

    /// Records `name` going up by 1.
    ///
    /// # Errors
    ///
    /// Returns a backend write error when this call triggers a flush.
    pub fn incr(&mut self, name: &str) -> AppResult<()> {
        self.record(name, 1)
    }

    /// Records `name` going up by `value`.
    ///
    /// # Errors
    ///
    /// Returns a backend write error when this call triggers a flush.
    pub fn incr_by(&mut self, name: &str, value: i64) -> AppResult<()> {
        self.record(name, value)
    }

    /// Records `name` going down by 1.
    ///
    /// # Errors
    ///
    /// Returns a backend write error when this call triggers a flush.
    pub fn decr(&mut self, name: &str) -> AppResult<()> {
        self.record(name, -1)
    }

    /// Records `name` going down by `value`.
    ///
    /// # Errors
    ///
    /// Returns a backend write error when this call triggers a flush.
    pub fn decr_by(&mut self, name: &str, value: i64) -> AppResult<()> {
        self.record(name, value.saturating_neg())
    }

    fn record(&mut self, name: &str, value: i64) -> AppResult<()> {
        self.buffer.push(MetricRecord::now(name, value));
        if self.buffer.len() >= self.buffer_limit.get() {
            self.flush()?;
        }
        Ok(())
    }

    /// Writes all buffered records to the backend in insertion order and
    /// clears the buffer. A no-op on an empty buffer: the backend is not
    /// touched and the target file is not created.
    ///
    /// # Errors
    ///
    /// Returns the backend's I/O error unchanged; the buffer is left
    /// intact so no record is lost.
    pub fn flush(&mut self) -> AppResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.writer.write_records(&self.buffer)?;
        debug!(
            "Flushed {} metric records to {}",
            self.buffer.len(),
            self.writer.path().display()
        );
        self.buffer.clear();
        Ok(())
    }

    /// Number of records currently buffered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub const fn buffer_limit(&self) -> PositiveUsize {
        self.buffer_limit
    }

    #[must_use]
    pub const fn writer(&self) -> &StatsWriter {
        &self.writer
    }
}

impl Drop for Statsd {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if let Err(err) = self.flush() {
            warn!(
                "Dropping {} unflushed metric records: {}",
                self.buffer.len(),
                err
            );
        }
    }
}
