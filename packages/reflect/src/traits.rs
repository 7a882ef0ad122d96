//! Core traits: Reflect, Introspect.

use std::any::Any;
use std::fmt;

use crate::{ReflectError, TypeDescriptor, Value};

/// Upcast to `Any` for exact type checks and downcasting.
///
/// Implemented for every `'static` type; never implement it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Member access on a concrete instance.
///
/// This is the trusted boundary of the mapper: an implementation lives next
/// to the type it reflects and may read and write private state. Nothing but
/// the mapper should call it.
///
/// Plain data holders only implement the two field operations. Types that
/// expose computed values or guarded setters also implement `call` and
/// `call_with`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Reflect>`.
pub trait Reflect: AsAny + Send + Sync {
    /// Rust type name of the concrete instance.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Read a field by name.
    fn field(&self, name: &str) -> Result<Value, ReflectError>;

    /// Assign a field by name.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ReflectError>;

    /// Invoke a zero-argument method and return its result.
    fn call(&self, name: &str) -> Result<Value, ReflectError> {
        Err(ReflectError::NoSuchMethod {
            type_name: self.type_name().to_string(),
            name: name.to_string(),
        })
    }

    /// Invoke a one-argument method for its side effect.
    fn call_with(&mut self, name: &str, arg: Value) -> Result<(), ReflectError> {
        let _ = arg;
        Err(ReflectError::NoSuchMethod {
            type_name: self.type_name().to_string(),
            name: name.to_string(),
        })
    }
}

impl dyn Reflect {
    /// Is the concrete type exactly `T`?
    pub fn is<T: Reflect>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self).downcast_mut::<T>()
    }

    /// Take ownership of the concrete value, or get the box back unchanged.
    pub fn downcast<T: Reflect>(self: Box<Self>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match AsAny::into_any(self).downcast::<T>() {
            Ok(concrete) => Ok(concrete),
            Err(_) => unreachable!("type checked above"),
        }
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.type_name()).finish_non_exhaustive()
    }
}

/// A reflected type that can describe its own shape.
///
/// Usually derived together with `Reflect`: `#[derive(Reflect)]` emits both
/// impls from one struct definition.
///
/// Used by `TypeRegistry::register`.
pub trait Introspect: Reflect + Sized {
    fn describe() -> Result<TypeDescriptor, ReflectError>;
}
