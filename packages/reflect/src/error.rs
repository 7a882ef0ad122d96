//! Error types for the reflection layer.
//!
//! Errors at this level describe a failed member access on a concrete type.
//! Policy errors (read-only properties, mismatched metadata) belong in
//! higher layers.

use crate::Value;

/// Errors raised while describing types or touching their members.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReflectError {
    /// The type does not declare a field with this name.
    #[error("type '{type_name}' has no field '{name}'")]
    NoSuchField { type_name: String, name: String },

    /// The type does not declare a method with this name.
    #[error("type '{type_name}' has no method '{name}'")]
    NoSuchMethod { type_name: String, name: String },

    /// A value had the wrong variant for the member it was assigned to.
    ///
    /// Values are never coerced: an integer is not accepted where a string
    /// is expected.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A member name is not a valid identifier.
    #[error("invalid member name '{name}': {message}")]
    InvalidName { name: String, message: String },

    /// Two members of the same kind share a name in one descriptor.
    #[error("type '{type_name}' declares '{name}' twice")]
    DuplicateMember { type_name: String, name: String },

    /// A descriptor declares a member its `Reflect` impl does not handle.
    #[error("type '{type_name}' declares '{name}' but does not implement it")]
    UnbackedMember { type_name: String, name: String },

    /// A method body reported a failure.
    #[error("{message}")]
    Failed { message: String },
}

impl ReflectError {
    /// No field `name` on `T`.
    pub fn no_such_field<T: ?Sized>(name: &str) -> Self {
        ReflectError::NoSuchField {
            type_name: std::any::type_name::<T>().to_string(),
            name: name.to_string(),
        }
    }

    /// No method `name` on `T`.
    pub fn no_such_method<T: ?Sized>(name: &str) -> Self {
        ReflectError::NoSuchMethod {
            type_name: std::any::type_name::<T>().to_string(),
            name: name.to_string(),
        }
    }

    /// `value` could not be taken as `expected`.
    pub fn mismatch(expected: &'static str, value: &Value) -> Self {
        ReflectError::TypeMismatch {
            expected,
            found: value.kind().to_string(),
        }
    }

    /// A method failed with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        ReflectError::Failed {
            message: message.into(),
        }
    }
}
