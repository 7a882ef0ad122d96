//! A reflected instance as a JSON object, and back.

use dtomap_core::Error;
use dtomap_reflect::{Reflect, TypeDescriptor};

use crate::convert::{json_to_value, value_to_json};

/// Read every declared field of `instance` into a JSON object.
///
/// Only fields listed by `descriptor` are included.
pub fn snapshot(
    instance: &dyn Reflect,
    descriptor: &TypeDescriptor,
) -> Result<serde_json::Value, Error> {
    if !descriptor.is_instance(instance) {
        return Err(Error::UnsupportedObject {
            expected: descriptor.name().to_string(),
            actual: instance.type_name().to_string(),
        });
    }

    let mut object = serde_json::Map::new();
    for field in descriptor.fields() {
        let name = field.name.as_str();
        let json = instance
            .field(name)
            .and_then(value_to_json)
            .map_err(|source| Error::DtoField {
                name: name.to_string(),
                source,
            })?;
        object.insert(name.to_string(), json);
    }
    Ok(serde_json::Value::Object(object))
}

/// Build a blank instance of `descriptor` and fill it from a JSON object.
///
/// Keys absent from the payload keep their blank value. Unknown keys, and
/// numbers outside the `i64` range, are an error.
pub fn restore(
    descriptor: &TypeDescriptor,
    payload: serde_json::Value,
) -> Result<Box<dyn Reflect>, Error> {
    let object = match payload {
        serde_json::Value::Object(object) => object,
        other => {
            return Err(Error::InvalidPayload {
                type_name: descriptor.name().to_string(),
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            })
        }
    };

    let mut instance = descriptor.instantiate();
    for (key, value) in object {
        tracing::trace!(type_name = descriptor.name(), field = %key, "restoring field");
        json_to_value(value)
            .and_then(|value| instance.set_field(&key, value))
            .map_err(|source| Error::DtoField {
                name: key.clone(),
                source,
            })?;
    }
    Ok(instance)
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
