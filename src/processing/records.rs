//! Record-set primitives: [`find`], [`select`] and [`copy`].

use crate::error::{DataError, DataResult};
use crate::types::{DataSet, Record, Value};

/// Returns the first record (in order) whose `field` strictly equals `value`.
///
/// Equality is [`Value::strict_eq`]. Records without `field` never match.
pub fn find<'a>(dataset: &'a DataSet, field: &str, value: &Value) -> Option<&'a Record> {
    dataset
        .iter()
        .find(|record| record.get(field).is_some_and(|v| v.strict_eq(value)))
}

/// Extracts `field` from every record, in order.
///
/// Records that lack the field contribute [`Value::Null`] at their position.
pub fn select(dataset: &DataSet, field: &str) -> Vec<Value> {
    dataset
        .iter()
        .map(|record| record.get(field).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Copies a dataset one level deep.
///
/// The field set is taken from the **first** record. Every output record has exactly those fields,
/// in that order: a later record missing one of them gets [`Value::Null`] for it, and fields that
/// only appear on later records are dropped.
///
/// Returns [`DataError::EmptyInput`] for an empty dataset.
pub fn copy(dataset: &DataSet) -> DataResult<DataSet> {
    let first = dataset
        .records
        .first()
        .ok_or(DataError::EmptyInput { operation: "copy" })?;
    let keys: Vec<&str> = first.field_names().collect();

    Ok(dataset
        .iter()
        .map(|record| {
            keys.iter()
                .map(|&k| (k, record.get(k).cloned().unwrap_or(Value::Null)))
                .collect::<Record>()
        })
        .collect())
}

/// Copies a single record with all of its fields.
pub fn copy_record(record: &Record) -> Record {
    record.iter().map(|(k, v)| (k, v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::{copy, copy_record, find, select};
    use crate::error::DataError;
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
    fn find_returns_first_match() {
        let ds = DataSet::new(vec![
            Record::new().with("k", 1).with("tag", "a"),
            Record::new().with("k", 2).with("tag", "b"),
            Record::new().with("k", 2).with("tag", "c"),
        ]);
        let hit = find(&ds, "k", &Value::Int64(2)).unwrap();
        assert_eq!(hit.get("tag"), Some(&Value::Utf8("b".to_string())));
        assert!(std::ptr::eq(hit, &ds.records[1]));
    }

    #[test]
    fn find_returns_none_without_match() {
        let ds = sample_dataset();
        assert!(find(&ds, "count", &Value::Int64(100)).is_none());
        assert!(find(&ds, "missing", &Value::Int64(20)).is_none());
        assert!(find(&ds, "count", &Value::Utf8("20".to_string())).is_none());
    }

    #[test]
    fn select_propagates_missing_fields_as_null() {
        let ds = DataSet::new(vec![
            Record::new().with("a", 1),
            Record::new().with("b", 2),
            Record::new().with("a", 3),
        ]);
        assert_eq!(
            select(&ds, "a"),
            vec![Value::Int64(1), Value::Null, Value::Int64(3)]
        );
        assert!(select(&DataSet::default(), "a").is_empty());
    }

    #[test]
    fn copy_is_equal_and_independent() {
        let ds = sample_dataset();
        let mut out = copy(&ds).unwrap();
        assert_eq!(out, ds);

        out.records[0].set("count", 999);
        assert_eq!(ds.records[0].get("count"), Some(&Value::Int64(20)));
        assert_eq!(copy(&out).unwrap(), out);
    }

    #[test]
    fn copy_takes_shape_from_first_record() {
        let ds = DataSet::new(vec![
            Record::new().with("a", 1).with("b", 2),
            Record::new().with("a", 3).with("c", 4),
        ]);
        let out = copy(&ds).unwrap();
        assert_eq!(
            out.records[1],
            Record::new().with("a", 3).with("b", Value::Null)
        );
    }

    #[test]
    fn copy_rejects_empty_dataset() {
        let err = copy(&DataSet::default()).unwrap_err();
        assert!(matches!(err, DataError::EmptyInput { operation: "copy" }));
    }

    #[test]
    fn copy_record_keeps_all_fields() {
        let r = Record::new().with("count", 0).with("label", "none");
        assert_eq!(copy_record(&r), r);
    }
}
