//! Property metadata: one DTO field and how to reach it on the original.

use std::fmt;
use std::sync::Arc;

use dtomap_reflect::{MemberName, Reflect, Shape, Value};

use crate::{AccessType, Accessor, ClassMetadata, Error};

/// What the transformer needs from a property.
///
/// `PropertyMetadata` is the standard implementation. Other implementations
/// can be attached to a `ClassMetadata` with `attach_property`, e.g. to
/// share one mapping between several class pairs or to stub one in a test.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn PropertyMapping>`.
pub trait PropertyMapping: Send + Sync + fmt::Debug {
    /// Name of the field on the DTO side.
    fn dto_name(&self) -> &str;

    /// Does this property take part in object -> DTO conversion?
    fn can_read(&self) -> bool;

    /// Does this property take part in DTO -> object conversion?
    fn can_write(&self) -> bool;

    /// Read the value from an original object.
    fn get(&self, object: &dyn Reflect) -> Result<Value, Error>;

    /// Write a value into an original object.
    fn set(&self, object: &mut dyn Reflect, value: Value) -> Result<(), Error>;
}

/// Metadata for a single mapped property.
///
/// The getter and setter are resolved when they are set, by looking the name
/// up in the original type's shape: a field of that name first, then a
/// method taking no argument (getter) or one argument (setter). They are
/// then replayed against whatever instance `get`/`set` receive.
///
/// ```rust,ignore
/// metadata
///     .add_property("role", None)?
///     .set_getter("user_role")?
///     .set_setter("set_access_role")?;
/// ```
#[derive(Clone, Debug)]
pub struct PropertyMetadata {
    shape: Arc<Shape>,
    original_name: MemberName,
    dto_name: MemberName,
    access: AccessType,
    getter: Option<Accessor>,
    setter: Option<Accessor>,
}

impl PropertyMetadata {
    /// Create metadata for `original_name`, exposed as `dto_name` (or the
    /// same name when `None`).
    ///
    /// Getter and setter both default to `original_name`. A side that cannot
    /// be resolved is left unbound: a computed zero-argument method has no
    /// setter, and is expected to be made `ReadOnly`. Construction only fails
    /// when neither side resolves.
    pub fn new(
        metadata: &ClassMetadata,
        original_name: &str,
        dto_name: Option<&str>,
    ) -> Result<Self, Error> {
        let original_name = parse_specifier(original_name)?;
        let dto_name = match dto_name {
            Some(name) => parse_specifier(name)?,
            None => original_name.clone(),
        };
        let shape = metadata.original_shape();

        let getter = Accessor::resolve_getter(&shape, &original_name).ok();
        let setter = Accessor::resolve_setter(&shape, &original_name).ok();
        if getter.is_none() && setter.is_none() {
            return Err(Error::UnknownPropertyOrMethod {
                name: original_name.to_string(),
            });
        }

        Ok(PropertyMetadata {
            shape,
            original_name,
            dto_name,
            access: AccessType::default(),
            getter,
            setter,
        })
    }

    /// Named constructor, same as `new`.
    pub fn create(
        metadata: &ClassMetadata,
        original_name: &str,
        dto_name: Option<&str>,
    ) -> Result<Self, Error> {
        Self::new(metadata, original_name, dto_name)
    }

    /// The original-side name this property was created for.
    pub fn original_name(&self) -> &str {
        self.original_name.as_str()
    }

    pub fn set_dto_name(&mut self, name: &str) -> Result<&mut Self, Error> {
        self.dto_name = parse_specifier(name)?;
        Ok(self)
    }

    pub fn access_type(&self) -> AccessType {
        self.access
    }

    pub fn set_access_type(&mut self, access: AccessType) -> &mut Self {
        self.access = access;
        self
    }

    /// Set the policy from its raw code (`AccessType::ACCESS_*`).
    pub fn set_access_type_raw(&mut self, code: u8) -> Result<&mut Self, Error> {
        self.access = AccessType::try_from(code)?;
        Ok(self)
    }

    /// The resolved reader, if any.
    pub fn getter(&self) -> Option<&Accessor> {
        self.getter.as_ref()
    }

    /// The resolved writer, if any.
    pub fn setter(&self) -> Option<&Accessor> {
        self.setter.as_ref()
    }

    /// Read through `name`: a field, or else a zero-argument method.
    pub fn set_getter(&mut self, name: &str) -> Result<&mut Self, Error> {
        let name = parse_specifier(name)?;
        self.getter = Some(Accessor::resolve_getter(&self.shape, &name)?);
        Ok(self)
    }

    /// Write through `name`: a field, or else a one-argument method.
    pub fn set_setter(&mut self, name: &str) -> Result<&mut Self, Error> {
        let name = parse_specifier(name)?;
        self.setter = Some(Accessor::resolve_setter(&self.shape, &name)?);
        Ok(self)
    }
}

impl PropertyMapping for PropertyMetadata {
    fn dto_name(&self) -> &str {
        self.dto_name.as_str()
    }

    fn can_read(&self) -> bool {
        self.access.can_read()
    }

    fn can_write(&self) -> bool {
        self.access.can_write()
    }

    fn get(&self, object: &dyn Reflect) -> Result<Value, Error> {
        if !self.can_read() {
            return Err(Error::WriteOnlyViolation {
                name: self.dto_name.to_string(),
            });
        }
        let getter = self
            .getter
            .as_ref()
            .ok_or_else(|| Error::UnknownPropertyOrMethod {
                name: self.original_name.to_string(),
            })?;
        getter.read(object)
    }

    fn set(&self, object: &mut dyn Reflect, value: Value) -> Result<(), Error> {
        if !self.can_write() {
            return Err(Error::ReadOnlyViolation {
                name: self.dto_name.to_string(),
            });
        }
        let setter = self
            .setter
            .as_ref()
            .ok_or_else(|| Error::UnknownPropertyOrMethod {
                name: self.original_name.to_string(),
            })?;
        setter.write(object, value)
    }
}

fn parse_specifier(name: &str) -> Result<MemberName, Error> {
    MemberName::parse(name).map_err(|source| Error::InvalidAccessorSpecifier {
        specifier: name.to_string(),
        source,
    })
}
