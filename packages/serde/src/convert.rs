//! Conversions between `Value`, serde types and JSON.
//!
//! Conversions are exact in both directions, like the rest of the value
//! layer. The one exception is `Bytes`: JSON has no binary type, so bytes are
//! written as a base64 string and read back as a `String`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dtomap_reflect::{ReflectError, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value as Json};

/// Build a Rust type from a `Value` with its `Deserialize` impl.
///
/// Meant for `set_field` implementations whose field is a serde type rather
/// than a `FromValue` one, and for `#[reflect(with = dtomap_serde)]`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ReflectError> {
    let json = value_to_json(value)?;
    serde_json::from_value(json).map_err(|e| ReflectError::TypeMismatch {
        expected: std::any::type_name::<T>(),
        found: e.to_string(),
    })
}

/// Turn a Rust type into a `Value` with its `Serialize` impl.
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, ReflectError> {
    let json = serde_json::to_value(data).map_err(|e| ReflectError::failed(e.to_string()))?;
    json_to_value(json)
}

/// Render a `Value` as JSON.
///
/// Fails on a non-finite float, which JSON cannot represent.
pub fn value_to_json(value: Value) -> Result<Json, ReflectError> {
    let json = match value {
        Value::Null => Json::Null,
        Value::Bool(flag) => Json::Bool(flag),
        Value::Integer(int) => Json::from(int),
        Value::Float(float) => Number::from_f64(float)
            .map(Json::Number)
            .ok_or_else(|| ReflectError::TypeMismatch {
                expected: "finite float",
                found: float.to_string(),
            })?,
        Value::String(text) => Json::String(text),
        Value::Bytes(bytes) => Json::String(BASE64.encode(bytes)),
        Value::Array(items) => Json::Array(
            items
                .into_iter()
                .map(value_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Map(entries) => Json::Object(
            entries
                .into_iter()
                .map(|(key, item)| Ok((key, value_to_json(item)?)))
                .collect::<Result<Map<_, _>, ReflectError>>()?,
        ),
    };
    Ok(json)
}

/// Read JSON into a `Value`.
///
/// Integers stay integers. An integer beyond the `i64` range is rejected
/// rather than rounded into a float.
pub fn json_to_value(json: Json) -> Result<Value, ReflectError> {
    let value = match json {
        Json::Null => Value::Null,
        Json::Bool(flag) => Value::Bool(flag),
        Json::Number(number) => number_to_value(&number)?,
        Json::String(text) => Value::String(text),
        Json::Array(items) => Value::Array(
            items
                .into_iter()
                .map(json_to_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, item)| Ok((key, json_to_value(item)?)))
                .collect::<Result<_, ReflectError>>()?,
        ),
    };
    Ok(value)
}

fn number_to_value(number: &Number) -> Result<Value, ReflectError> {
    if let Some(int) = number.as_i64() {
        return Ok(Value::Integer(int));
    }
    if number.is_u64() {
        return Err(ReflectError::TypeMismatch {
            expected: "integer within the i64 range",
            found: number.to_string(),
        });
    }
    number
        .as_f64()
        .map(Value::Float)
        .ok_or_else(|| ReflectError::TypeMismatch {
            expected: "number",
            found: number.to_string(),
        })
}
