//! [`Render`] for dynamically typed documents.
//!
//! Parsed JSON and TOML documents have no schema of their own, so objects and
//! tables render as string-keyed mappings.

#[cfg(any(feature = "serde_json", feature = "toml"))]
use super::{Render, ValueKind, mapping_of, sequence_of};
#[cfg(any(feature = "serde_json", feature = "toml"))]
use crate::Scalar;

#[cfg(feature = "serde_json")]
impl Render for serde_json::Value {
    fn kind(&self) -> ValueKind<'_> {
        use serde_json::Value;

        match self {
            Value::Null => ValueKind::Indirect(None),
            Value::Bool(flag) => ValueKind::Scalar(Scalar::Bool(*flag)),
            Value::Number(number) => ValueKind::Scalar(json_number(number)),
            Value::String(text) => ValueKind::Scalar(Scalar::Str(text.clone())),
            Value::Array(items) => sequence_of(items),
            Value::Object(map) => mapping_of(map),
        }
    }

    fn is_empty_value(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => true,
            Value::Bool(flag) => !*flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
            Value::String(text) => text.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

#[cfg(feature = "serde_json")]
fn json_number(number: &serde_json::Number) -> Scalar {
    number
        .as_i64()
        .map(Scalar::I64)
        .or_else(|| number.as_u64().map(Scalar::U64))
        .or_else(|| number.as_f64().map(Scalar::F64))
        .unwrap_or_else(|| Scalar::Str(number.to_string()))
}

#[cfg(feature = "toml")]
impl Render for toml::Value {
    fn kind(&self) -> ValueKind<'_> {
        use toml::Value;

        match self {
            Value::String(text) => ValueKind::Scalar(Scalar::Str(text.clone())),
            Value::Integer(number) => ValueKind::Scalar(Scalar::I64(*number)),
            Value::Float(number) => ValueKind::Scalar(Scalar::F64(*number)),
            Value::Boolean(flag) => ValueKind::Scalar(Scalar::Bool(*flag)),
            Value::Datetime(datetime) => ValueKind::Scalar(Scalar::Str(datetime.to_string())),
            Value::Array(items) => sequence_of(items),
            Value::Table(table) => mapping_of(table),
        }
    }

    fn is_empty_value(&self) -> bool {
        use toml::Value;

        match self {
            Value::String(text) => text.is_empty(),
            Value::Integer(number) => *number == 0,
            Value::Float(number) => *number == 0.0,
            Value::Boolean(flag) => !*flag,
            Value::Datetime(_) => false,
            Value::Array(items) => items.is_empty(),
            Value::Table(table) => table.is_empty(),
        }
    }
}
