//! Type descriptors and shapes.
//!
//! A `TypeDescriptor` is what a type registers about itself: its declared
//! fields and methods and how to build a blank instance. A `Shape` is the
//! lookup index derived from it, used when resolving accessor names.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{MemberName, Reflect, ReflectError, Value};

/// Declared visibility of a member.
///
/// Recorded for introspection only. Member access through `Reflect` ignores
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// A declared field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: MemberName,
    pub visibility: Visibility,
}

/// A declared method and the number of arguments it takes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: MemberName,
    pub arity: u8,
    pub visibility: Visibility,
}

type Instantiate = Arc<dyn Fn() -> Box<dyn Reflect> + Send + Sync>;

/// Everything the mapper knows about one type.
#[derive(Clone)]
pub struct TypeDescriptor {
    name: String,
    type_id: TypeId,
    rust_name: &'static str,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
    instantiate: Instantiate,
}

impl TypeDescriptor {
    /// Start describing `T` under the identifier `name`.
    ///
    /// `instantiate` builds a blank instance. It must not need any argument
    /// the mapper does not have: for a DTO this is usually `Default::default`,
    /// for a domain type a constructor that skips validation and leaves state
    /// to be filled in member by member.
    pub fn of<T, F>(name: impl Into<String>, instantiate: F) -> TypeDescriptorBuilder
    where
        T: Reflect,
        F: Fn() -> T + Send + Sync + 'static,
    {
        TypeDescriptorBuilder {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            rust_name: std::any::type_name::<T>(),
            fields: Vec::new(),
            methods: Vec::new(),
            instantiate: Arc::new(move || Box::new(instantiate()) as Box<dyn Reflect>),
        }
    }

    /// The registered identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The Rust type name of the described type.
    pub fn rust_name(&self) -> &'static str {
        self.rust_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Is `instance` exactly of the described type?
    pub fn is_instance(&self, instance: &dyn Reflect) -> bool {
        crate::AsAny::as_any(instance).type_id() == self.type_id
    }

    /// Build a blank instance without running the type's own constructor.
    pub fn instantiate(&self) -> Box<dyn Reflect> {
        (self.instantiate)()
    }

    /// Build the lookup index for this type.
    pub fn shape(&self) -> Shape {
        Shape {
            type_name: self.name.clone(),
            fields: self
                .fields
                .iter()
                .map(|f| (f.name.as_str().to_string(), f.visibility))
                .collect(),
            methods: self
                .methods
                .iter()
                .map(|m| ((m.name.as_str().to_string(), m.arity), m.visibility))
                .collect(),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("rust_name", &self.rust_name)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

/// Fluent builder returned by `TypeDescriptor::of`.
///
/// Names are validated in `build`.
pub struct TypeDescriptorBuilder {
    name: String,
    type_id: TypeId,
    rust_name: &'static str,
    fields: Vec<(String, Visibility)>,
    methods: Vec<(String, u8, Visibility)>,
    instantiate: Instantiate,
}

impl TypeDescriptorBuilder {
    /// Declare a field.
    pub fn field(mut self, name: &str, visibility: Visibility) -> Self {
        self.fields.push((name.to_string(), visibility));
        self
    }

    /// Declare a method taking `arity` arguments.
    pub fn method(mut self, name: &str, arity: u8, visibility: Visibility) -> Self {
        self.methods.push((name.to_string(), arity, visibility));
        self
    }

    /// Validate member names and produce the descriptor.
    ///
    /// A field and a method may share a name; two fields, or two methods of
    /// the same arity, may not. Every declared member is then tried on a
    /// throwaway blank instance: one the `Reflect` impl answers with
    /// `NoSuchField` or `NoSuchMethod` fails with `UnbackedMember`.
    pub fn build(self) -> Result<TypeDescriptor, ReflectError> {
        let duplicate = |name: &str| ReflectError::DuplicateMember {
            type_name: self.name.clone(),
            name: name.to_string(),
        };

        let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(self.fields.len());
        for (name, visibility) in &self.fields {
            let name = MemberName::parse(name)?;
            if fields.iter().any(|f| f.name == name) {
                return Err(duplicate(name.as_str()));
            }
            fields.push(FieldDescriptor {
                name,
                visibility: *visibility,
            });
        }

        let mut methods: Vec<MethodDescriptor> = Vec::with_capacity(self.methods.len());
        for (name, arity, visibility) in &self.methods {
            let name = MemberName::parse(name)?;
            if methods.iter().any(|m| m.name == name && m.arity == *arity) {
                return Err(duplicate(name.as_str()));
            }
            methods.push(MethodDescriptor {
                name,
                arity: *arity,
                visibility: *visibility,
            });
        }

        let descriptor = TypeDescriptor {
            name: self.name,
            type_id: self.type_id,
            rust_name: self.rust_name,
            fields,
            methods,
            instantiate: self.instantiate,
        };
        check_backed(&descriptor)?;
        Ok(descriptor)
    }
}

fn check_backed(descriptor: &TypeDescriptor) -> Result<(), ReflectError> {
    let unbacked = |name: &MemberName| ReflectError::UnbackedMember {
        type_name: descriptor.name.clone(),
        name: name.to_string(),
    };

    let mut blank = descriptor.instantiate();
    for field in &descriptor.fields {
        if let Err(ReflectError::NoSuchField { .. }) = blank.field(field.name.as_str()) {
            return Err(unbacked(&field.name));
        }
    }
    for method in &descriptor.methods {
        let outcome = match method.arity {
            0 => blank.call(method.name.as_str()).map(drop),
            1 => blank.call_with(method.name.as_str(), Value::Null),
            _ => continue,
        };
        if let Err(ReflectError::NoSuchMethod { .. }) = outcome {
            return Err(unbacked(&method.name));
        }
    }
    Ok(())
}

/// Name lookup over a type's declared members.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    type_name: String,
    fields: HashMap<String, Visibility>,
    methods: HashMap<(String, u8), Visibility>,
}

impl Shape {
    /// Identifier of the type this shape was built from.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Visibility of field `name`, if declared.
    pub fn field(&self, name: &str) -> Option<Visibility> {
        self.fields.get(name).copied()
    }

    /// Visibility of the `arity`-argument method `name`, if declared.
    pub fn method(&self, name: &str, arity: u8) -> Option<Visibility> {
        self.methods.get(&(name.to_string(), arity)).copied()
    }
}
