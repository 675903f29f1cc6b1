//! Values carried into fragments, and the kinds used for JDBC type inference.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GenqError, GenqResult};

/// Text that callers use to mean "no value".
pub const NULL_LITERAL: &str = "null";

/// Insertion-ordered keyed values, as passed to the map-based insert operations.
pub type ValueMap = IndexMap<String, Value>;

/// The kind of a value, declared (entity fields) or observed at runtime (maps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Timestamp,
    Decimal,
    Other,
}

/// A scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Runtime kind of this value. `Null` has no kind of its own and reports `Other`.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Other,
            Value::Text(_) => ValueKind::Text,
            Value::Int(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Date(_) => ValueKind::Date,
            Value::DateTime(_) => ValueKind::Timestamp,
        }
    }

    /// `Null`, or text equal to the `"null"` literal.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s == NULL_LITERAL,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Text(s) => f.write_str(s),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// A Rust type that can be persisted as an entity field.
///
/// `KIND` is the declared kind used for type inference; it does not depend on
/// the current value. `#[derive(Entity)]` requires this trait on every
/// non-transient field type.
pub trait SqlValue {
    const KIND: ValueKind;

    fn to_value(&self) -> Value;
}

macro_rules! impl_sql_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SqlValue for $ty {
                const KIND: ValueKind = ValueKind::Integer;

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_sql_value_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_sql_value_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SqlValue for $ty {
                const KIND: ValueKind = ValueKind::Integer;

                fn to_value(&self) -> Value {
                    // Out-of-range values keep their digits as text.
                    i64::try_from(*self)
                        .map(Value::Int)
                        .unwrap_or_else(|_| Value::Text(self.to_string()))
                }
            }
        )*
    };
}

impl_sql_value_wide_int!(u64, usize, isize);

impl SqlValue for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl SqlValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl SqlValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl SqlValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl SqlValue for &str {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl SqlValue for char {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl SqlValue for NaiveDate {
    const KIND: ValueKind = ValueKind::Date;

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl SqlValue for NaiveDateTime {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

impl<Tz: TimeZone> SqlValue for DateTime<Tz> {
    const KIND: ValueKind = ValueKind::Timestamp;

    fn to_value(&self) -> Value {
        Value::DateTime(self.naive_local())
    }
}

impl<T: SqlValue> SqlValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "uuid")]
impl SqlValue for uuid::Uuid {
    const KIND: ValueKind = ValueKind::Other;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

#[cfg(feature = "rust_decimal")]
impl SqlValue for rust_decimal::Decimal {
    const KIND: ValueKind = ValueKind::Decimal;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or_else(|| Value::Text(n.to_string()), Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            // Arrays and objects travel as their JSON text.
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Text(other.to_string())
            }
        }
    }
}

/// Build a [`ValueMap`] from a JSON object, keeping key order.
pub fn value_map_from_json(json: serde_json::Value) -> GenqResult<ValueMap> {
    match json {
        serde_json::Value::Object(obj) => Ok(obj.into_iter().map(|(k, v)| (k, v.into())).collect()),
        other => Err(GenqError::validation(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Parse JSON text into a [`ValueMap`]. The top level must be an object.
pub fn value_map_from_json_str(json: &str) -> GenqResult<ValueMap> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    value_map_from_json(parsed)
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Build a [`ValueMap`] from `key => value` pairs, in order.
///
/// ```
/// let values = genq::value_map! {
///     "loginId" => 42,
///     "birthDate" => "2020-01-15",
/// };
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! value_map {
    () => {
        $crate::ValueMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}
