//! Serde Integration for dtomap
//!
//! This layer connects reflected DTOs to the serde ecosystem. It adds:
//! - `to_value` / `from_value`: store any serde type in a reflected field
//! - `snapshot` / `restore`: a DTO as a JSON object and back
//! - `JsonTransform`: transform straight to and from JSON payloads
//! - Value <-> serde_json conversions
//!
//! # Example
//!
//! ```rust,ignore
//! use dtomap_serde::JsonTransform;
//!
//! let payload = Transformer::new().to_dto_json(&person, &metadata)?;
//! send(payload.to_string());
//!
//! let person = Transformer::new().to_object_from_json(received, &metadata)?;
//! ```

mod convert;
mod snapshot;
mod typed;

pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use snapshot::{restore, snapshot};
pub use typed::JsonTransform;

// Re-export core types for convenience
pub use dtomap_core::{ClassMetadata, Error, Transform, Transformer};
pub use dtomap_reflect::{Reflect, ReflectError, TypeDescriptor, Value};
