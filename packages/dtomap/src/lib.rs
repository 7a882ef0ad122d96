//! dtomap: map domain objects to data transfer objects and back.
//!
//! A `ClassMetadata` pairs an original class with a DTO class and lists the
//! properties to carry between them. Each property names its accessors on the
//! original side (a field or a method) and its field on the DTO side, plus an
//! access policy. A stateless `Transformer` walks that metadata in either
//! direction; building an original object never runs its normal constructor.
//!
//! Types take part by implementing `Reflect` (member access) and `Introspect`
//! (declared shape), usually both through `#[derive(Reflect)]`, and are
//! looked up by identifier in a `TypeRegistry`.
//!
//! ```rust,ignore
//! use dtomap::{AccessType, ClassMetadata, Reflect, Transform, Transformer, TypeRegistry};
//!
//! #[derive(Reflect)]
//! #[reflect(crate = "dtomap", name = "app::Person", blank = Person::blank, getters(full_name))]
//! struct Person { /* ... */ }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Person>()?.register::<PersonDto>()?;
//!
//! let mut metadata = ClassMetadata::new(&registry, "app::Person", "app::PersonDto")?;
//! metadata.add_property("city", Some("city_name"))?;
//! metadata
//!     .add_property("full_name", None)?
//!     .set_access_type(AccessType::ReadOnly);
//!
//! let dto: PersonDto = Transformer::new().to_dto_as(&person, &metadata)?;
//! ```

pub use dtomap_core::{
    AccessType, Accessor, ClassMetadata, Error, PropertyMapping, PropertyMetadata, Transform,
    Transformer,
};
pub use dtomap_reflect::{
    FieldDescriptor, FromValue, Introspect, MemberName, MethodDescriptor, Reflect, ReflectError,
    Shape, TypeDescriptor, TypeDescriptorBuilder, TypeRegistry, Value, Visibility,
};

/// JSON payloads and serde-typed fields.
#[cfg(feature = "serde")]
pub mod json {
    pub use dtomap_serde::{
        from_value, json_to_value, restore, snapshot, to_value, value_to_json, JsonTransform,
    };
}
