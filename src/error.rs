use thiserror::Error;

/// Convenience result type for dataset operations.
pub type DataResult<T> = Result<T, DataError>;

/// Error type returned by processing functions.
///
/// A single error enum shared by every operation in [`crate::processing`].
#[derive(Debug, Error)]
pub enum DataError {
    /// The operation needs at least one record to infer structure (field set, index range).
    #[error("{operation} requires a non-empty dataset")]
    EmptyInput { operation: &'static str },

    /// A record's index field is missing or is not an integer.
    #[error("invalid index at row {row} field '{field}': expected integer, got {value}")]
    InvalidIndex {
        row: usize,
        field: String,
        value: String,
    },

    /// The resolved fill range is inverted or too large to allocate.
    #[error("invalid fill range: start={start} end={end}")]
    InvalidRange { start: i64, end: i64 },

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
