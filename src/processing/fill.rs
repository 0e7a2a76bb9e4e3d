//! Gap-filling over an integer index field.
//!
//! [`fill()`] turns a sparse series such as `2004, 2006, 2007` into a dense one
//! (`2004, 2005, 2006, 2007`), synthesizing a record from a defaults template for every
//! missing index.

use std::collections::HashMap;

use crate::error::{DataError, DataResult};
use crate::types::{DataSet, Record, Value};

use super::range::{array_max, array_min};
use super::records::{copy, copy_record};

/// Returns a dataset with one record per integer index in the resolved range, ascending.
///
/// For each index `i`, the output holds the first input record whose `index_field` equals `i`;
/// if there is none, it holds a copy of `defaults` with `index_field` set to `i`. Input records
/// whose index falls outside the range are not emitted.
///
/// Range resolution, with `min`/`max` taken from the existing index values:
///
/// - neither bound given: `[min, max]`
/// - only `start`, below `min`: `[start, max]`
/// - only `start`, above `max`: `[min, start]` (the value widens the upper bound instead)
/// - only `start`, inside `[min, max]`: `[start, max]`
/// - only `end`: `[min, end]`
/// - both given: used as given
///
/// # Errors
///
/// - [`DataError::EmptyInput`] if `dataset` is empty.
/// - [`DataError::InvalidIndex`] if a record's `index_field` is missing or not an integer.
/// - [`DataError::InvalidRange`] if the resolved `end` is below `start`, or the range holds more
///   records than can be allocated.
///
/// # Examples
///
/// ```rust
/// use tabular_utils::processing::{fill, select};
/// use tabular_utils::types::{DataSet, Record, Value};
///
/// let ds = DataSet::new(vec![
///     Record::new().with("year", 2010).with("likes", 12),
///     Record::new().with("year", 2011).with("likes", 26),
///     Record::new().with("year", 2014).with("likes", 8),
/// ]);
/// let defaults = Record::new().with("likes", 0);
///
/// let out = fill(&ds, "year", &defaults, Some(2015), None).unwrap();
/// assert_eq!(
///     select(&out, "likes"),
///     [12, 26, 0, 0, 8, 0].map(Value::Int64).to_vec()
/// );
/// ```
pub fn fill(
    dataset: &DataSet,
    index_field: &str,
    defaults: &Record,
    start: Option<i64>,
    end: Option<i64>,
) -> DataResult<DataSet> {
    let data = copy(dataset).map_err(|_| DataError::EmptyInput { operation: "fill" })?;

    let indexes = index_values(&data, index_field)?;
    let min = array_min(&indexes)?;
    let max = array_max(&indexes)?;
    let (start, end) = resolve_range(min, max, start, end);

    let len = end
        .checked_sub(start)
        .and_then(|span| usize::try_from(span).ok())
        .and_then(|span| span.checked_add(1))
        .ok_or(DataError::InvalidRange { start, end })?;

    // First occurrence wins, matching a front-to-back search.
    let mut by_index: HashMap<i64, usize> = HashMap::with_capacity(indexes.len());
    for (pos, &idx) in indexes.iter().enumerate() {
        by_index.entry(idx).or_insert(pos);
    }

    let mut records = Vec::new();
    records
        .try_reserve(len)
        .map_err(|_| DataError::InvalidRange { start, end })?;
    for i in start..=end {
        let record = match by_index.get(&i) {
            Some(&pos) => data.records[pos].clone(),
            None => {
                let mut synthesized = copy_record(defaults);
                synthesized.set(index_field, Value::Int64(i));
                synthesized
            }
        };
        records.push(record);
    }

    Ok(DataSet::new(records))
}

fn index_values(data: &DataSet, index_field: &str) -> DataResult<Vec<i64>> {
    data.iter()
        .enumerate()
        .map(|(row, record)| {
            let value = record.get(index_field).unwrap_or(&Value::Null);
            value.as_integer().ok_or_else(|| DataError::InvalidIndex {
                row,
                field: index_field.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

fn resolve_range(min: i64, max: i64, start: Option<i64>, end: Option<i64>) -> (i64, i64) {
    match (start, end) {
        (None, None) => (min, max),
        (Some(s), None) if s > max => (min, s),
        (Some(s), None) => (s, max),
        (None, Some(e)) => (min, e),
        (Some(s), Some(e)) => (s, e),
    }
}
