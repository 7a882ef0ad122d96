//! Type resolution by identifier.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Introspect, ReflectError, TypeDescriptor};

/// Maps type identifiers to their descriptors.
///
/// Cloning a registry is cheap; clones share descriptors until one of them
/// registers something new. Build it once, then hand out clones or
/// references.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: Arc<HashMap<String, Arc<TypeDescriptor>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe `T` and register it under its own identifier.
    pub fn register<T: Introspect>(&mut self) -> Result<&mut Self, ReflectError> {
        let descriptor = T::describe()?;
        Ok(self.insert(descriptor))
    }

    /// Register a descriptor, replacing any previous one with the same name.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        let name = descriptor.name().to_string();
        tracing::debug!(
            type_name = %name,
            rust_type = descriptor.rust_name(),
            fields = descriptor.fields().len(),
            methods = descriptor.methods().len(),
            "registering type"
        );
        let types = Arc::make_mut(&mut self.types);
        if types.insert(name.clone(), Arc::new(descriptor)).is_some() {
            tracing::warn!(type_name = %name, "replaced previously registered type");
        }
        self
    }

    /// Resolve an identifier.
    pub fn resolve(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.types.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
