//! Owned bind values and parameter mappings.
//!
//! Resolution is driver-agnostic: a [`Value`] carries the bound data as plain
//! owned Rust types and the caller hands the ordered value list to whatever
//! driver executes the statement. [`ParamMap`] is the name → value mapping
//! consumed by clause filtering and marker substitution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Parameter mapping used throughout resolution (name → bound value).
pub type ParamMap = HashMap<String, Value>;

/// An owned SQL bind value.
///
/// # Example
/// ```ignore
/// use sqlsnip::Value;
///
/// let v: Value = 42.into();
/// let s: Value = "admin".into();
/// let absent: Value = Option::<i64>::None.into(); // Value::Null
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Raw byte string
    Bytes(Vec<u8>),
}

impl Value {
    /// Check if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
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

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    /// Convert a JSON value into a bind value.
    ///
    /// Arrays and objects are bound as their JSON text (useful for `json`/`jsonb`
    /// columns); numbers prefer the integer representation when exact.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Text(other.to_string()),
        }
    }
}

/// Build a [`ParamMap`] from `name => value` pairs.
///
/// Values go through [`Value::from`], so plain Rust scalars work directly:
///
/// ```ignore
/// let params = sqlsnip::params! {
///     "status" => "active",
///     "limit" => 10,
/// };
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::ParamMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ParamMap::new();
        $(
            map.insert(::std::string::String::from($name), $crate::Value::from($value));
        )+
        map
    }};
}
