//! Min/max reductions used to infer a fill range.

use crate::error::{DataError, DataResult};

/// Minimum of a non-empty sequence (first element seeds the reduction, strict `<`).
pub(crate) fn array_min<T: PartialOrd + Copy>(values: &[T]) -> DataResult<T> {
    reduce_pairwise(values, |acc, v| v < acc)
}

/// Maximum of a non-empty sequence (first element seeds the reduction, strict `>`).
pub(crate) fn array_max<T: PartialOrd + Copy>(values: &[T]) -> DataResult<T> {
    reduce_pairwise(values, |acc, v| v > acc)
}

fn reduce_pairwise<T, F>(values: &[T], replaces: F) -> DataResult<T>
where
    T: PartialOrd + Copy,
    F: Fn(T, T) -> bool,
{
    let (&first, rest) = values.split_first().ok_or(DataError::EmptyInput {
        operation: "range reduction",
    })?;
    Ok(rest
        .iter()
        .fold(first, |acc, &v| if replaces(acc, v) { v } else { acc }))
}
