//! Derivations that depend on the previous record: running totals and period-over-period growth.
//!
//! Both operations use dataset order as the time order. Sort before calling.

use crate::error::{DataError, DataResult};
use crate::types::{DataSet, Value};

use super::records::{copy, select};

/// Adds `output` to every record: the running sum of `input`, starting from `baseline`.
///
/// `out[0] = in[0] + baseline` and `out[i] = in[i] + out[i - 1]`. A missing or non-numeric
/// `baseline` (including `NaN`) counts as `0`.
/// Sums follow [`Value::numeric_add`]: integers stay integers, and a missing or non-numeric
/// `input` turns that position and every later one into [`Value::Null`].
///
/// # Examples
///
/// ```rust
/// use tabular_utils::processing::{cumulative, select};
/// use tabular_utils::types::{DataSet, Record, Value};
///
/// let ds: DataSet = [1, 2, 3]
///     .into_iter()
///     .map(|c| Record::new().with("count", c))
///     .collect();
///
/// let out = cumulative(&ds, "count", "cumCount", Some(Value::Int64(20))).unwrap();
/// assert_eq!(select(&out, "cumCount"), [21, 23, 26].map(Value::Int64).to_vec());
/// ```
pub fn cumulative(
    dataset: &DataSet,
    input: &str,
    output: &str,
    baseline: Option<Value>,
) -> DataResult<DataSet> {
    let mut data = copy(dataset).map_err(|_| DataError::EmptyInput {
        operation: "cumulative",
    })?;

    let mut running = baseline
        .filter(|b| b.as_f64().is_some_and(|v| !v.is_nan()))
        .unwrap_or(Value::Int64(0));
    for record in &mut data.records {
        let current = record.get(input).unwrap_or(&Value::Null);
        running = current.numeric_add(&running);
        record.set(output, running.clone());
    }

    Ok(data)
}

/// Adds `output` to every record after the first: `in[i] / in[i - 1] * 100`.
///
/// The first record has no predecessor. With `trim` it is dropped (the output is one record
/// shorter than the input); without it, it is kept with `output` set to `0.0`.
///
/// Values are computed as `f64` with IEEE semantics, so a zero predecessor yields an infinity
/// or `NaN`. A missing or non-numeric operand yields [`Value::Null`].
pub fn percent_growth(
    dataset: &DataSet,
    input: &str,
    output: &str,
    trim: bool,
) -> DataResult<DataSet> {
    let mut data = copy(dataset).map_err(|_| DataError::EmptyInput {
        operation: "percent_growth",
    })?;

    let inputs = select(&data, input);
    for (record, pair) in data.records.iter_mut().skip(1).zip(inputs.windows(2)) {
        record.set(output, percent_of(&pair[1], &pair[0]));
    }

    if trim {
        data.records.remove(0);
    } else if let Some(first) = data.records.first_mut() {
        first.set(output, Value::Float64(0.0));
    }

    Ok(data)
}

fn percent_of(current: &Value, previous: &Value) -> Value {
    match (current.as_f64(), previous.as_f64()) {
        (Some(c), Some(p)) => Value::Float64(c / p * 100.0),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::{cumulative, percent_growth};
    use crate::error::DataError;
    use crate::processing::select;
    use crate::types::{DataSet, Record, Value};

    fn sample_dataset() -> DataSet {
        DataSet::new(vec![
            Record::new().with("year", 2004).with("count", 20),
            Record::new().with("year", 2006).with("count", 3),
            Record::new().with("year", 2007).with("count", 43),
            Record::new().with("year", 2008).with("count", 25),
            Record::new().with("year", 2010).with("count", 2),
        ])
    }

    #[test]
    fn cumulative_running_sum() {
        let ds = sample_dataset();
        let out = cumulative(&ds, "count", "cumCount", None).unwrap();
        assert_eq!(out.row_count(), ds.row_count());
        assert_eq!(
            select(&out, "cumCount"),
            [20, 23, 66, 91, 93].map(Value::Int64).to_vec()
        );
        // Input untouched.
        assert!(!ds.records[0].contains("cumCount"));
    }

    #[test]
    fn cumulative_baseline_offsets_first_value() {
        let out = cumulative(&sample_dataset(), "count", "cumCount", Some(Value::Int64(200))).unwrap();
        assert_eq!(select(&out, "cumCount")[0], Value::Int64(220));
        assert_eq!(select(&out, "cumCount")[4], Value::Int64(293));
    }

    #[test]
    fn cumulative_float_baseline_promotes_to_float() {
        let out = cumulative(&sample_dataset(), "count", "c", Some(Value::Float64(0.5))).unwrap();
        assert_eq!(select(&out, "c")[0], Value::Float64(20.5));
    }

    #[test]
    fn cumulative_non_numeric_baseline_counts_as_zero() {
        let expected = [20, 23, 66, 91, 93].map(Value::Int64).to_vec();
        for baseline in [Value::Null, Value::from("x"), Value::Bool(true), Value::Float64(f64::NAN)] {
            let out = cumulative(&sample_dataset(), "count", "cumCount", Some(baseline)).unwrap();
            assert_eq!(select(&out, "cumCount"), expected);
        }
    }

    #[test]
    fn cumulative_null_propagates_forward() {
        let ds = DataSet::new(vec![
            Record::new().with("count", 1),
            Record::new().with("count", Value::Null),
            Record::new().with("count", 3),
        ]);
        let out = cumulative(&ds, "count", "c", None).unwrap();
        assert_eq!(
            select(&out, "c"),
            vec![Value::Int64(1), Value::Null, Value::Null]
        );
    }

    #[test]
    fn cumulative_overwrites_existing_output_field() {
        let ds = DataSet::new(vec![
            Record::new().with("count", 1).with("c", 100),
            Record::new().with("count", 2).with("c", 100),
        ]);
        let out = cumulative(&ds, "count", "c", None).unwrap();
        assert_eq!(select(&out, "c"), [1, 3].map(Value::Int64).to_vec());
        assert_eq!(out.records[0].len(), 2);
    }

    #[test]
    fn cumulative_rejects_empty_dataset() {
        let err = cumulative(&DataSet::default(), "count", "c", None).unwrap_err();
        assert!(matches!(err, DataError::EmptyInput { operation: "cumulative" }));
    }

    #[test]
    fn percent_growth_trims_first_record_by_default() {
        let cum = cumulative(&sample_dataset(), "count", "cumCount", None).unwrap();
        let out = percent_growth(&cum, "cumCount", "perGro", true).unwrap();

        assert_eq!(out.row_count(), cum.row_count() - 1);
        assert_eq!(out.records[0].get("year"), Some(&Value::Int64(2006)));
        assert_eq!(
            select(&out, "perGro")[2],
            Value::Float64(91.0 / 66.0 * 100.0)
        );
    }

    #[test]
    fn percent_growth_without_trim_zeroes_first_record() {
        let cum = cumulative(&sample_dataset(), "count", "cumCount", None).unwrap();
        let out = percent_growth(&cum, "cumCount", "perGro", false).unwrap();

        assert_eq!(out.row_count(), cum.row_count());
        assert_eq!(out.records[0].get("perGro"), Some(&Value::Float64(0.0)));
        assert_eq!(
            out.records[1].get("perGro"),
            Some(&Value::Float64(23.0 / 20.0 * 100.0))
        );
    }

    #[test]
    fn percent_growth_zero_predecessor_follows_float_division() {
        let ds = DataSet::new(vec![
            Record::new().with("n", 0),
            Record::new().with("n", 5),
            Record::new().with("n", 0),
            Record::new().with("n", 0),
        ]);
        let out = percent_growth(&ds, "n", "g", true).unwrap();
        let g = select(&out, "g");
        assert_eq!(g[0], Value::Float64(f64::INFINITY));
        assert_eq!(g[1], Value::Float64(0.0));
        assert!(matches!(g[2], Value::Float64(v) if v.is_nan()));
    }

    #[test]
    fn percent_growth_non_numeric_yields_null() {
        let ds = DataSet::new(vec![
            Record::new().with("n", 10),
            Record::new().with("n", "x"),
            Record::new().with("n", 30),
        ]);
        let out = percent_growth(&ds, "n", "g", false).unwrap();
        assert_eq!(
            select(&out, "g"),
            vec![Value::Float64(0.0), Value::Null, Value::Null]
        );
    }

    #[test]
    fn percent_growth_single_record() {
        let ds = DataSet::new(vec![Record::new().with("n", 10)]);
        assert!(percent_growth(&ds, "n", "g", true).unwrap().is_empty());
        assert_eq!(percent_growth(&ds, "n", "g", false).unwrap().row_count(), 1);
    }

    #[test]
    fn percent_growth_rejects_empty_dataset() {
        let err = percent_growth(&DataSet::default(), "n", "g", true).unwrap_err();
        assert!(matches!(err, DataError::EmptyInput { operation: "percent_growth" }));
    }
}
