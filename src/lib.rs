//! `tabular-utils` is a small library of helper operations over an in-memory
//! [`types::DataSet`]: an ordered list of flat [`types::Record`]s, the shape charting and
//! reporting code usually works with.
//!
//! ## Operations
//!
//! All six live in [`processing`] and are re-exported here:
//!
//! - [`find`]: first record whose field strictly equals a value, or `None`
//! - [`select`]: one field of every record, as a column of values
//! - [`copy`]: one-level copy whose field set comes from the **first** record
//! - [`fill`]: densify an integer-indexed series, inserting default records for gaps
//! - [`cumulative`]: running sum of a field into a new field
//! - [`percent_growth`]: `current / previous * 100` of a field into a new field
//!
//! None of them mutate their input. Operations that need at least one record to infer structure
//! return [`DataError::EmptyInput`] on an empty dataset. Missing fields never fail a call; they
//! show up positionally as [`types::Value::Null`].
//!
//! ## Example
//!
//! ```rust
//! use tabular_utils::{cumulative, fill, percent_growth, select};
//! use tabular_utils::types::{DataSet, Record, Value};
//!
//! # fn main() -> Result<(), tabular_utils::DataError> {
//! let ds = DataSet::new(vec![
//!     Record::new().with("year", 2004).with("count", 20),
//!     Record::new().with("year", 2006).with("count", 3),
//!     Record::new().with("year", 2007).with("count", 43),
//! ]);
//!
//! let dense = fill(&ds, "year", &Record::new().with("count", 0), None, None)?;
//! assert_eq!(select(&dense, "count"), [20, 0, 3, 43].map(Value::Int64).to_vec());
//!
//! let totals = cumulative(&dense, "count", "cumCount", None)?;
//! assert_eq!(select(&totals, "cumCount"), [20, 20, 23, 66].map(Value::Int64).to_vec());
//!
//! let growth = percent_growth(&totals, "cumCount", "growth", true)?;
//! assert_eq!(growth.row_count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: values, records and datasets
//! - [`processing`]: the dataset operations
//! - [`processor`]: [`processor::DataProcessor`], option structs and observer reporting
//! - [`observability`]: observer trait plus stderr/composite observers
//! - [`error`]: error type shared across the crate

pub mod error;
pub mod observability;
pub mod processing;
pub mod processor;
pub mod types;

pub use error::{DataError, DataResult};
pub use processing::{copy, cumulative, fill, find, percent_growth, select};
