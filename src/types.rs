//! Core data model types.
//!
//! A [`DataSet`] is an ordered list of flat [`Record`]s, each mapping field names to scalar
//! [`Value`]s. Records in a dataset are expected to share one shape; the processing operations
//! treat the **first** record as the authority on that shape.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::DataResult;

/// A single scalar value in a [`Record`].
///
/// Serializes to the matching JSON scalar (`Null` becomes `null`).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value. Also used positionally for fields a record does not have.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Numeric view of the value. `Int64` and `Float64` are numeric; everything else is not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view of the value, accepting floats that hold an exact integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            Value::Float64(v)
                if v.is_finite()
                    && v.fract() == 0.0
                    && *v >= i64::MIN as f64
                    && *v < i64::MAX as f64 =>
            {
                Some(*v as i64)
            }
            _ => None,
        }
    }

    /// Strict equality: no coercion between strings, booleans, numbers and null.
    ///
    /// `Int64` and `Float64` share one numeric domain, so `Int64(3)` equals `Float64(3.0)`.
    /// `NaN` is not equal to anything, itself included.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Utf8(a), Value::Utf8(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Int64(_) | Value::Float64(_), Value::Int64(_) | Value::Float64(_)) => {
                match (self.as_integer(), other.as_integer()) {
                    (Some(a), Some(b)) => a == b,
                    _ => self.as_f64() == other.as_f64(),
                }
            }
            _ => false,
        }
    }

    /// Numeric addition.
    ///
    /// `Int64 + Int64` stays `Int64` unless it overflows, in which case it is computed as `Float64`.
    /// Any other numeric mix produces `Float64`. A non-numeric operand produces `Null`.
    pub fn numeric_add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int64(a), Value::Int64(b)) => match a.checked_add(*b) {
                Some(sum) => Value::Int64(sum),
                None => Value::Float64(*a as f64 + *b as f64),
            },
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Value::Float64(a + b),
                _ => Value::Null,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// A flat, ordered mapping from field name to [`Value`].
///
/// Field order is insertion order. Setting an existing field replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Value of `name`, if the record has that field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Set `name` to `value`, replacing an existing field or appending a new one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns `true` if the record has a field called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// In-memory tabular dataset: an ordered list of [`Record`]s.
///
/// Order is meaningful for sequential operations such as
/// [`crate::processing::cumulative`]; it is the caller's job to sort first.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct DataSet {
    /// Records in order.
    pub records: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the dataset.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field names of the first record, which define the dataset's shape.
    ///
    /// Returns `None` for an empty dataset.
    pub fn field_names(&self) -> Option<Vec<&str>> {
        self.records.first().map(|r| r.field_names().collect())
    }

    /// Iterate records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Serialize the dataset as a JSON array of objects.
    pub fn to_json_string(&self) -> DataResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<Record> for DataSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
