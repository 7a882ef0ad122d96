//! Core dtomap: declarative object <-> DTO mapping.
//!
//! This layer adds meaning to the raw member access of `dtomap-reflect`:
//! - `ClassMetadata`: pairs an original type with a DTO type and owns the
//!   property mappings between them
//! - `PropertyMetadata`: one DTO field, its access policy, and the accessor
//!   and mutator resolved against the original type
//! - `Transformer`: converts instances in either direction using that
//!   metadata
//!
//! Metadata is built once and reused for any number of conversions.
//!
//! # Example
//!
//! ```rust,ignore
//! use dtomap_core::{AccessType, ClassMetadata, Transformer};
//!
//! let mut metadata = ClassMetadata::new(&registry, "app::Person", "app::PersonDto")?;
//! metadata.add_property("age", None)?;
//! metadata.add_property("city", Some("city_name"))?;
//! metadata
//!     .add_property("full_name", None)?
//!     .set_access_type(AccessType::ReadOnly);
//!
//! let dto: PersonDto = Transformer::new().to_dto_as(&person, &metadata)?;
//! ```

mod access;
mod accessor;
mod class;
mod error;
mod property;
mod transformer;

#[cfg(test)]
mod test_support;

pub use access::AccessType;
pub use accessor::Accessor;
pub use class::ClassMetadata;
pub use error::Error;
pub use property::{PropertyMapping, PropertyMetadata};
pub use transformer::{Transform, Transformer};

// Re-export reflection types for convenience
pub use dtomap_reflect::{
    FromValue, Introspect, MemberName, Reflect, ReflectError, Shape, TypeDescriptor, TypeRegistry,
    Value, Visibility,
};
