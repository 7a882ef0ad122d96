//! The Value type - what a member read produces and a member write consumes.
//!
//! Values are dynamically typed so that one accessor signature fits every
//! field and method. Conversions in and out are exact: there is no numeric
//! widening, no string parsing, no truthiness.

use std::collections::BTreeMap;

use crate::ReflectError;

/// A dynamically-typed value read from or written to a reflected member.
///
/// `Map` keys iterate in sorted order, so two DTOs with equal fields always
/// produce equal values.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Binary data.
    Bytes(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Take the raw bytes out of a `Bytes` value.
    pub fn into_bytes(self) -> Result<Vec<u8>, ReflectError> {
        match self {
            Value::Bytes(b) => Ok(b),
            other => Err(ReflectError::mismatch("bytes", &other)),
        }
    }

    /// Convert into a concrete Rust type.
    ///
    /// This is the usual way for a `Reflect` implementation to accept a value
    /// in `set_field`:
    ///
    /// ```rust
    /// use dtomap_reflect::Value;
    ///
    /// let age: i64 = Value::Integer(42).into_typed().unwrap();
    /// assert_eq!(age, 42);
    ///
    /// let nickname: Option<String> = Value::Null.into_typed().unwrap();
    /// assert_eq!(nickname, None);
    /// ```
    pub fn into_typed<T: FromValue>(self) -> Result<T, ReflectError> {
        T::from_value(self)
    }
}

/// Exact conversion out of a `Value`.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ReflectError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ReflectError::mismatch("bool", &other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(ReflectError::mismatch("integer", &other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Integer(i) => i32::try_from(i).map_err(|_| ReflectError::TypeMismatch {
                expected: "i32",
                found: format!("integer {}", i),
            }),
            other => Err(ReflectError::mismatch("i32", &other)),
        }
    }
}

impl FromValue for u32 {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Integer(i) => u32::try_from(i).map_err(|_| ReflectError::TypeMismatch {
                expected: "u32",
                found: format!("integer {}", i),
            }),
            other => Err(ReflectError::mismatch("u32", &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(ReflectError::mismatch("float", &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ReflectError::mismatch("string", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ReflectError::mismatch("array", &other)),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(ReflectError::mismatch("map", &other)),
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(v: BTreeMap<String, T>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
