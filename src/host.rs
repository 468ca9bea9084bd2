//! Model of the opaque values a host environment hands to the bridge.
//!
//! The bridge never trusts the shape of a `HostValue`; it inspects it
//! read-only through [`HostValue::as_sequence`] and [`HostValue::as_float`].

use serde_json::Value;

/// A dynamically typed caller value.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<HostValue>),
    Tuple(Vec<HostValue>),
}

impl HostValue {
    /// Host-style type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::None => "NoneType",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "str",
            HostValue::List(_) => "list",
            HostValue::Tuple(_) => "tuple",
        }
    }

    /// Elements of a list. Tuples and every other value are not sequences
    /// for the bridge.
    pub fn as_sequence(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The value of a float. Ints and bools are not coerced.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            HostValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Float(v)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        HostValue::Str(v.to_string())
    }
}

impl From<Vec<f64>> for HostValue {
    fn from(values: Vec<f64>) -> Self {
        HostValue::List(values.into_iter().map(HostValue::Float).collect())
    }
}

impl From<Value> for HostValue {
    /// JSON arrays become lists. Numbers written with a fraction or exponent
    /// become floats and integral numbers become ints, so `[1, 2]` is not a
    /// list of floats. Objects are kept as their JSON text.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => HostValue::None,
            Value::Bool(b) => HostValue::Bool(b),
            Value::Number(n) => from_number_literal(&n.to_string()),
            Value::String(s) => HostValue::Str(s),
            Value::Array(items) => {
                HostValue::List(items.into_iter().map(HostValue::from).collect())
            }
            obj @ Value::Object(_) => HostValue::Str(obj.to_string()),
        }
    }
}

/// Classify a JSON number by how it was written, so `-0` stays an int.
///
/// Relies on serde_json's `arbitrary_precision`, which keeps the literal text.
fn from_number_literal(text: &str) -> HostValue {
    if text.contains(['.', 'e', 'E']) {
        return text
            .parse::<f64>()
            .map(HostValue::Float)
            .unwrap_or(HostValue::Str(text.to_string()));
    }
    match text.parse::<i64>() {
        Ok(i) => HostValue::Int(i),
        // Integral but beyond i64: still an int, never a float.
        Err(_) if text.starts_with('-') => HostValue::Int(i64::MIN),
        Err(_) => HostValue::Int(i64::MAX),
    }
}
