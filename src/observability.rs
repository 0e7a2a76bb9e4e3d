//! Observer hooks for processing outcomes.
//!
//! [`crate::processor::DataProcessor`] reports every call to an optional
//! [`ProcessingObserver`]. Implementors can record metrics, write logs, or raise alerts.

use std::fmt;
use std::sync::Arc;

use crate::error::DataError;

/// Operation names reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Copy,
    Fill,
    Cumulative,
    PercentGrowth,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Copy => "copy",
            Operation::Fill => "fill",
            Operation::Cumulative => "cumulative",
            Operation::PercentGrowth => "percent_growth",
        })
    }
}

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (caller passed something unusable, e.g. an empty dataset).
    Warning,
    /// Error-level event (operation failed on bad data).
    Error,
    /// Critical error (serialization failures).
    Critical,
}

impl Severity {
    /// Classify an error.
    pub fn of(error: &DataError) -> Self {
        match error {
            DataError::EmptyInput { .. } => Severity::Warning,
            DataError::InvalidIndex { .. } | DataError::InvalidRange { .. } => Severity::Error,
            DataError::Json(_) => Severity::Critical,
        }
    }
}

/// Context about a processing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingContext {
    /// Which operation ran.
    pub operation: Operation,
    /// Number of records in the input dataset.
    pub input_rows: usize,
}

/// Minimal stats reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Number of records in the output dataset.
    pub output_rows: usize,
}

/// Observer interface for processing outcomes.
pub trait ProcessingObserver: Send + Sync {
    /// Called when an operation succeeds.
    fn on_success(&self, _ctx: &ProcessingContext, _stats: ProcessingStats) {}

    /// Called when an operation fails.
    fn on_failure(&self, _ctx: &ProcessingContext, _severity: Severity, _error: &DataError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ProcessingContext, severity: Severity, error: &DataError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ProcessingObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ProcessingObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ProcessingObserver for CompositeObserver {
    fn on_success(&self, ctx: &ProcessingContext, stats: ProcessingStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ProcessingContext, severity: Severity, error: &DataError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ProcessingContext, severity: Severity, error: &DataError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs processing events to stderr, one line per event.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ProcessingObserver for StdErrObserver {
    fn on_success(&self, ctx: &ProcessingContext, stats: ProcessingStats) {
        eprintln!(
            "[process][ok] op={} rows_in={} rows_out={}",
            ctx.operation, ctx.input_rows, stats.output_rows
        );
    }

    fn on_failure(&self, ctx: &ProcessingContext, severity: Severity, error: &DataError) {
        eprintln!(
            "[process][{:?}] op={} rows_in={} err={}",
            severity, ctx.operation, ctx.input_rows, error
        );
    }

    fn on_alert(&self, ctx: &ProcessingContext, severity: Severity, error: &DataError) {
        eprintln!(
            "[ALERT][process][{:?}] op={} rows_in={} err={}",
            severity, ctx.operation, ctx.input_rows, error
        );
    }
}
