//! JSON payload extension for transformers.

use dtomap_core::{ClassMetadata, Error, Transform};
use dtomap_reflect::Reflect;

use crate::snapshot::{restore, snapshot};

/// Extension trait for JSON DTO payloads.
///
/// This trait is automatically implemented for all `Transform`
/// implementations. The DTO still goes through its own reflected type, so
/// a payload is accepted only if every key names a field of the DTO class.
///
/// # Example
///
/// ```rust,ignore
/// use dtomap_serde::JsonTransform;
///
/// let payload = transformer.to_dto_json(&person, &metadata)?;
/// assert_eq!(payload["first_name"], "Ada");
/// ```
pub trait JsonTransform: Transform {
    /// Build the DTO for `object` and render it as a JSON object.
    fn to_dto_json(
        &self,
        object: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<serde_json::Value, Error> {
        let dto = self.to_dto(object, metadata)?;
        snapshot(&*dto, metadata.dto_type())
    }

    /// Restore the DTO from a JSON object, then build the original object.
    fn to_object_from_json(
        &self,
        payload: serde_json::Value,
        metadata: &ClassMetadata,
    ) -> Result<Box<dyn Reflect>, Error> {
        let dto = restore(metadata.dto_type(), payload)?;
        self.to_object(&*dto, metadata)
    }

    /// `to_object_from_json`, downcast to the concrete original type.
    fn to_object_from_json_as<T: Reflect>(
        &self,
        payload: serde_json::Value,
        metadata: &ClassMetadata,
    ) -> Result<T, Error>
    where
        Self: Sized,
    {
        let object = self.to_object_from_json(payload, metadata)?;
        let actual = object.type_name().to_string();
        object
            .downcast::<T>()
            .map(|concrete| *concrete)
            .map_err(|_| Error::UnsupportedObject {
                expected: metadata.original_class().to_string(),
                actual,
            })
    }
}

// Blanket implementation for all transformers
impl<T: Transform + ?Sized> JsonTransform for T {}
