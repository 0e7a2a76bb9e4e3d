//! Configured, observable entry point for the processing operations.
//!
//! The free functions in [`crate::processing`] are the core API. [`DataProcessor`] wraps the
//! operations that can fail with option structs (each with a [`Default`]) and reports every call
//! to an optional [`ProcessingObserver`]:
//!
//! - `on_success` with output row count
//! - `on_failure` with a computed [`Severity`]
//! - `on_alert` when that severity is >= [`ProcessingOptions::alert_at_or_above`]
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use tabular_utils::observability::StdErrObserver;
//! use tabular_utils::processor::{DataProcessor, FillRange, ProcessingOptions};
//! use tabular_utils::types::{DataSet, Record};
//!
//! let processor = DataProcessor::new(ProcessingOptions::default())
//!     .with_observer(Arc::new(StdErrObserver));
//!
//! let ds = DataSet::new(vec![
//!     Record::new().with("year", 2004).with("count", 20),
//!     Record::new().with("year", 2006).with("count", 3),
//! ]);
//! let range = FillRange { end: Some(2008), ..Default::default() };
//! let out = processor.fill(&ds, "year", &Record::new().with("count", 0), range).unwrap();
//! assert_eq!(out.row_count(), 5);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::DataResult;
use crate::observability::{
    Operation, ProcessingContext, ProcessingObserver, ProcessingStats, Severity,
};
use crate::processing;
use crate::types::{DataSet, Record, Value};

/// Processor-wide options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            alert_at_or_above: Severity::Error,
        }
    }
}

/// Optional bounds for [`processing::fill()`]. Omitted bounds are inferred from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// Options for [`processing::cumulative()`].
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeOptions {
    /// Value added to the first record's input before accumulating.
    pub baseline: Value,
}

impl Default for CumulativeOptions {
    fn default() -> Self {
        Self {
            baseline: Value::Int64(0),
        }
    }
}

/// Options for [`processing::percent_growth()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthOptions {
    /// Drop the first record (which has no predecessor) instead of giving it `0`.
    pub trim: bool,
}

impl Default for GrowthOptions {
    fn default() -> Self {
        Self { trim: true }
    }
}

/// Runs processing operations with configured options and observer reporting.
#[derive(Clone, Default)]
pub struct DataProcessor {
    opts: ProcessingOptions,
    observer: Option<Arc<dyn ProcessingObserver>>,
}

impl fmt::Debug for DataProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProcessor")
            .field("opts", &self.opts)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl DataProcessor {
    /// Create a processor with the given options and no observer.
    pub fn new(opts: ProcessingOptions) -> Self {
        Self {
            opts,
            observer: None,
        }
    }

    /// Attach an observer for success/failure/alert reporting.
    pub fn with_observer(mut self, observer: Arc<dyn ProcessingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Options this processor was built with.
    pub fn options(&self) -> &ProcessingOptions {
        &self.opts
    }

    /// See [`processing::copy()`].
    pub fn copy(&self, dataset: &DataSet) -> DataResult<DataSet> {
        self.observe(Operation::Copy, dataset, || processing::copy(dataset))
    }

    /// See [`processing::fill()`].
    pub fn fill(
        &self,
        dataset: &DataSet,
        index_field: &str,
        defaults: &Record,
        range: FillRange,
    ) -> DataResult<DataSet> {
        self.observe(Operation::Fill, dataset, || {
            processing::fill(dataset, index_field, defaults, range.start, range.end)
        })
    }

    /// See [`processing::cumulative()`].
    pub fn cumulative(
        &self,
        dataset: &DataSet,
        input: &str,
        output: &str,
        options: &CumulativeOptions,
    ) -> DataResult<DataSet> {
        self.observe(Operation::Cumulative, dataset, || {
            processing::cumulative(dataset, input, output, Some(options.baseline.clone()))
        })
    }

    /// See [`processing::percent_growth()`].
    pub fn percent_growth(
        &self,
        dataset: &DataSet,
        input: &str,
        output: &str,
        options: GrowthOptions,
    ) -> DataResult<DataSet> {
        self.observe(Operation::PercentGrowth, dataset, || {
            processing::percent_growth(dataset, input, output, options.trim)
        })
    }

    fn observe<F>(&self, operation: Operation, input: &DataSet, run: F) -> DataResult<DataSet>
    where
        F: FnOnce() -> DataResult<DataSet>,
    {
        let result = run();
        let Some(observer) = self.observer.as_deref() else {
            return result;
        };

        let ctx = ProcessingContext {
            operation,
            input_rows: input.row_count(),
        };
        match &result {
            Ok(out) => observer.on_success(
                &ctx,
                ProcessingStats {
                    output_rows: out.row_count(),
                },
            ),
            Err(e) => {
                let severity = Severity::of(e);
                observer.on_failure(&ctx, severity, e);
                if severity >= self.opts.alert_at_or_above {
                    observer.on_alert(&ctx, severity, e);
                }
            }
        }
        result
    }
}
