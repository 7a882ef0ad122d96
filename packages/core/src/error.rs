//! Error types for the core layer.

use dtomap_reflect::ReflectError;

/// Errors raised while building metadata or transforming instances.
///
/// All of these point at a configuration or programming mistake; none is
/// transient. A failing property aborts the whole conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A type identifier is not registered.
    #[error("can't find class by '{identifier}' name")]
    UnknownClass { identifier: String },

    /// An access policy outside `ACCESS_RW`, `ACCESS_READ`, `ACCESS_WRITE`.
    #[error("invalid access type '{value}', expects one of: ACCESS_RW, ACCESS_READ or ACCESS_WRITE")]
    InvalidAccessType { value: String },

    /// A getter, setter or DTO name that is not a plain member name.
    #[error("expected a property or method name, got '{specifier}'")]
    InvalidAccessorSpecifier {
        specifier: String,
        #[source]
        source: ReflectError,
    },

    /// Neither a field nor a method of the right arity has this name.
    #[error("can't find property or method with name '{name}'")]
    UnknownPropertyOrMethod { name: String },

    /// Read attempted on a write-only property.
    #[error("property '{name}' has only write access")]
    WriteOnlyViolation { name: String },

    /// Write attempted on a read-only property.
    #[error("property '{name}' has only read access")]
    ReadOnlyViolation { name: String },

    /// The instance's runtime type is not exactly the one the metadata maps.
    #[error("can't transform '{actual}' object, expects '{expected}'")]
    UnsupportedObject { expected: String, actual: String },

    /// The resolved field or method on the original object failed.
    #[error("accessor '{name}' failed: {source}")]
    AccessorFailed {
        name: String,
        #[source]
        source: ReflectError,
    },

    /// Reading or assigning a DTO field failed.
    #[error("DTO field '{name}' failed: {source}")]
    DtoField {
        name: String,
        #[source]
        source: ReflectError,
    },

    /// A serialized DTO payload could not be used.
    #[error("invalid payload for '{type_name}': {message}")]
    InvalidPayload { type_name: String, message: String },
}
