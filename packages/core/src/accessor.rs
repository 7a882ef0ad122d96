//! Resolved accessors.
//!
//! An `Accessor` is the result of looking a name up once against a type's
//! shape. It remembers *what kind* of member was found and *which* one, but
//! not on what instance; the instance is supplied on every read or write.

use std::fmt;

use dtomap_reflect::{MemberName, Reflect, Shape, Value};

use crate::Error;

/// A member of the original type, bound by kind and name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// Read or assign a field.
    Field(MemberName),
    /// Invoke a method: zero arguments to read, one to write.
    Method(MemberName),
}

impl Accessor {
    /// Resolve a reader for `name`.
    ///
    /// A field wins over a zero-argument method of the same name.
    pub fn resolve_getter(shape: &Shape, name: &MemberName) -> Result<Self, Error> {
        Self::resolve(shape, name, 0)
    }

    /// Resolve a writer for `name`.
    ///
    /// A field wins over a one-argument method of the same name.
    pub fn resolve_setter(shape: &Shape, name: &MemberName) -> Result<Self, Error> {
        Self::resolve(shape, name, 1)
    }

    fn resolve(shape: &Shape, name: &MemberName, arity: u8) -> Result<Self, Error> {
        let (accessor, visibility) = if let Some(visibility) = shape.field(name.as_str()) {
            (Accessor::Field(name.clone()), visibility)
        } else if let Some(visibility) = shape.method(name.as_str(), arity) {
            (Accessor::Method(name.clone()), visibility)
        } else {
            return Err(Error::UnknownPropertyOrMethod {
                name: name.to_string(),
            });
        };

        tracing::debug!(
            type_name = shape.type_name(),
            accessor = %accessor,
            arity,
            ?visibility,
            "resolved accessor"
        );
        Ok(accessor)
    }

    pub fn name(&self) -> &MemberName {
        match self {
            Accessor::Field(name) | Accessor::Method(name) => name,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Accessor::Field(_))
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Accessor::Method(_))
    }

    /// Apply as a reader to `target`.
    pub fn read(&self, target: &dyn Reflect) -> Result<Value, Error> {
        let result = match self {
            Accessor::Field(name) => target.field(name.as_str()),
            Accessor::Method(name) => target.call(name.as_str()),
        };
        result.map_err(|source| Error::AccessorFailed {
            name: self.name().to_string(),
            source,
        })
    }

    /// Apply as a writer to `target`.
    pub fn write(&self, target: &mut dyn Reflect, value: Value) -> Result<(), Error> {
        let result = match self {
            Accessor::Field(name) => target.set_field(name.as_str(), value),
            Accessor::Method(name) => target.call_with(name.as_str(), value),
        };
        result.map_err(|source| Error::AccessorFailed {
            name: self.name().to_string(),
            source,
        })
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => write!(f, "{}", name),
            Accessor::Method(name) => write!(f, "{}()", name),
        }
    }
}
