//! In-memory dataset operations.
//!
//! Every operation borrows its input and returns new data; nothing here mutates a caller's
//! [`crate::types::DataSet`]. The exception to "new data" is [`find()`], which hands back a
//! reference into the input.
//!
//! - [`find()`]: first record whose field strictly equals a value
//! - [`select()`]: project one field into a column of values
//! - [`copy()`]: one-level copy, shaped by the first record
//! - [`fill()`]: densify an integer-indexed series with default records
//! - [`cumulative()`]: running sum into a new field
//! - [`percent_growth()`]: period-over-period percentage into a new field
//!
//! ## Example: fill → cumulative → percent growth
//!
//! ```rust
//! use tabular_utils::processing::{cumulative, fill, percent_growth, select};
//! use tabular_utils::types::{DataSet, Record, Value};
//!
//! let ds = DataSet::new(vec![
//!     Record::new().with("year", 2004).with("count", 20),
//!     Record::new().with("year", 2006).with("count", 3),
//! ]);
//!
//! let dense = fill(&ds, "year", &Record::new().with("count", 0), None, None).unwrap();
//! let totals = cumulative(&dense, "count", "total", None).unwrap();
//! assert_eq!(select(&totals, "total"), [20, 20, 23].map(Value::Int64).to_vec());
//!
//! let growth = percent_growth(&totals, "total", "growth", true).unwrap();
//! assert_eq!(growth.row_count(), 2);
//! assert_eq!(select(&growth, "growth")[1], Value::Float64(23.0 / 20.0 * 100.0));
//! ```

pub mod fill;
mod range;
pub mod records;
pub mod sequential;

pub use fill::fill;
pub use records::{copy, copy_record, find, select};
pub use sequential::{cumulative, percent_growth};
