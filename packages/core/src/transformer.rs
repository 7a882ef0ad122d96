//! Object <-> DTO conversion.

use dtomap_reflect::{Reflect, TypeDescriptor};

use crate::{ClassMetadata, Error};

/// Converts instances between the original and DTO shapes of a
/// `ClassMetadata`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Transform>`.
pub trait Transform {
    /// Build a DTO from an original object.
    ///
    /// Every readable property is read from `object` and assigned to the DTO
    /// field named by its `dto_name`.
    fn to_dto(
        &self,
        object: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<Box<dyn Reflect>, Error>;

    /// Build an original object from a DTO.
    ///
    /// The object is created without running its normal constructor, then
    /// every writable property is filled from the DTO field named by its
    /// `dto_name`.
    fn to_object(
        &self,
        dto: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<Box<dyn Reflect>, Error>;
}

/// The standard, stateless transformer.
///
/// It holds no state, so one instance can serve any number of metadata and
/// threads at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transformer;

impl Transformer {
    pub fn new() -> Self {
        Transformer
    }

    /// `to_dto`, downcast to the concrete DTO type.
    pub fn to_dto_as<D: Reflect>(
        &self,
        object: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<D, Error> {
        let dto = self.to_dto(object, metadata)?;
        downcast(dto, metadata.dto_type())
    }

    /// `to_object`, downcast to the concrete original type.
    pub fn to_object_as<T: Reflect>(
        &self,
        dto: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<T, Error> {
        let object = self.to_object(dto, metadata)?;
        downcast(object, metadata.original_type())
    }
}

impl Transform for Transformer {
    fn to_dto(
        &self,
        object: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<Box<dyn Reflect>, Error> {
        ensure_instance(object, metadata.original_type())?;

        let mut dto = metadata.dto_type().instantiate();
        for property in metadata.properties().filter(|p| p.can_read()) {
            let value = property.get(object)?;
            tracing::trace!(
                dto_type = metadata.dto_class(),
                field = property.dto_name(),
                kind = value.kind(),
                "to_dto"
            );
            dto.set_field(property.dto_name(), value)
                .map_err(|source| Error::DtoField {
                    name: property.dto_name().to_string(),
                    source,
                })?;
        }
        Ok(dto)
    }

    fn to_object(
        &self,
        dto: &dyn Reflect,
        metadata: &ClassMetadata,
    ) -> Result<Box<dyn Reflect>, Error> {
        ensure_instance(dto, metadata.dto_type())?;

        let mut object = metadata.original_type().instantiate();
        for property in metadata.properties().filter(|p| p.can_write()) {
            let value = dto
                .field(property.dto_name())
                .map_err(|source| Error::DtoField {
                    name: property.dto_name().to_string(),
                    source,
                })?;
            tracing::trace!(
                original_type = metadata.original_class(),
                field = property.dto_name(),
                kind = value.kind(),
                "to_object"
            );
            property.set(&mut *object, value)?;
        }
        Ok(object)
    }
}

fn ensure_instance(instance: &dyn Reflect, expected: &TypeDescriptor) -> Result<(), Error> {
    if expected.is_instance(instance) {
        Ok(())
    } else {
        Err(Error::UnsupportedObject {
            expected: expected.name().to_string(),
            actual: instance.type_name().to_string(),
        })
    }
}

fn downcast<T: Reflect>(instance: Box<dyn Reflect>, produced: &TypeDescriptor) -> Result<T, Error> {
    instance
        .downcast::<T>()
        .map(|concrete| *concrete)
        .map_err(|_| Error::UnsupportedObject {
            expected: std::any::type_name::<T>().to_string(),
            actual: produced.rust_name().to_string(),
        })
}
