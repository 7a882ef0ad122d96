//! Low-level reflection for dtomap.
//!
//! This layer knows nothing about DTOs or access policies. It provides the
//! three collaborators the mapper is built on:
//! - `TypeRegistry`: resolve a type identifier to a `TypeDescriptor`
//! - `TypeDescriptor` / `Shape`: the declared fields and methods of a type
//! - `Reflect`: read and write those members on a concrete instance
//!
//! Member values travel as `Value`, a dynamically-typed tree.
//!
//! # Example
//!
//! ```rust
//! use dtomap_reflect::{Reflect, TypeRegistry, Value};
//!
//! #[derive(Default, Reflect)]
//! #[reflect(name = "geo::Point")]
//! struct Point {
//!     x: i64,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Point>().unwrap();
//! assert!(registry.contains("geo::Point"));
//!
//! let mut point = Point::default();
//! point.set_field("x", Value::from(3)).unwrap();
//! assert_eq!(point.field("x").unwrap(), Value::from(3));
//! ```
//!
//! Hand-written `Reflect` and `Introspect` impls work the same way; the
//! derive keeps the declared members and the dispatched members in step.

mod descriptor;
mod error;
mod name;
mod registry;
mod traits;
mod value;

pub use descriptor::{
    FieldDescriptor, MethodDescriptor, Shape, TypeDescriptor, TypeDescriptorBuilder, Visibility,
};
pub use error::ReflectError;
pub use name::MemberName;
pub use registry::TypeRegistry;
pub use traits::{AsAny, Introspect, Reflect};
pub use value::{FromValue, Value};

#[cfg(feature = "derive")]
pub use dtomap_derive::Reflect;
