//! Class metadata: one (original type, DTO type) pairing.

use std::sync::{Arc, OnceLock};

use dtomap_reflect::{Shape, TypeDescriptor, TypeRegistry};

use crate::{Error, PropertyMapping, PropertyMetadata};

/// Position of one property in insertion order.
#[derive(Debug)]
enum Slot {
    /// Index into `owned`; created by `add_property`.
    Owned(usize),
    /// Attached from outside; may be shared with other metadata.
    Shared(Arc<dyn PropertyMapping>),
}

/// Describes how one original type maps onto one DTO type.
///
/// Both types are resolved through a `TypeRegistry` when they are set, so an
/// unknown identifier fails here rather than at conversion time.
///
/// Build the metadata once, then treat it as immutable and share it between
/// conversions (and threads).
#[derive(Debug)]
pub struct ClassMetadata {
    original: Arc<TypeDescriptor>,
    dto: Arc<TypeDescriptor>,
    original_shape: OnceLock<Arc<Shape>>,
    owned: Vec<PropertyMetadata>,
    order: Vec<Slot>,
}

impl ClassMetadata {
    /// Pair `original` with `dto`, both looked up in `registry`.
    pub fn new(registry: &TypeRegistry, original: &str, dto: &str) -> Result<Self, Error> {
        Ok(ClassMetadata {
            original: resolve(registry, original)?,
            dto: resolve(registry, dto)?,
            original_shape: OnceLock::new(),
            owned: Vec::new(),
            order: Vec::new(),
        })
    }

    /// Named constructor that also attaches existing property mappings.
    pub fn create<I>(
        registry: &TypeRegistry,
        original: &str,
        dto: &str,
        properties: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Arc<dyn PropertyMapping>>,
    {
        let mut metadata = Self::new(registry, original, dto)?;
        for property in properties {
            metadata.attach_property(property);
        }
        Ok(metadata)
    }

    /// Identifier of the original type.
    pub fn original_class(&self) -> &str {
        self.original.name()
    }

    /// Identifier of the DTO type.
    pub fn dto_class(&self) -> &str {
        self.dto.name()
    }

    pub fn original_type(&self) -> &Arc<TypeDescriptor> {
        &self.original
    }

    pub fn dto_type(&self) -> &Arc<TypeDescriptor> {
        &self.dto
    }

    /// Point this metadata at a different original type.
    ///
    /// Properties created from now on resolve against the new type. Existing
    /// ones keep the shape they were resolved against.
    pub fn set_original_class(
        &mut self,
        registry: &TypeRegistry,
        identifier: &str,
    ) -> Result<&mut Self, Error> {
        self.original = resolve(registry, identifier)?;
        self.original_shape = OnceLock::new();
        Ok(self)
    }

    pub fn set_dto_class(
        &mut self,
        registry: &TypeRegistry,
        identifier: &str,
    ) -> Result<&mut Self, Error> {
        self.dto = resolve(registry, identifier)?;
        Ok(self)
    }

    /// Lookup index over the original type's members, built on first use.
    pub fn original_shape(&self) -> Arc<Shape> {
        self.original_shape
            .get_or_init(|| Arc::new(self.original.shape()))
            .clone()
    }

    /// Map `original_name` to the DTO field `dto_name` (or the same name).
    ///
    /// Returns the new property for further configuration:
    ///
    /// ```rust,ignore
    /// metadata
    ///     .add_property("first_name", None)?
    ///     .set_access_type(AccessType::WriteOnly);
    /// ```
    pub fn add_property(
        &mut self,
        original_name: &str,
        dto_name: Option<&str>,
    ) -> Result<&mut PropertyMetadata, Error> {
        let property = PropertyMetadata::new(self, original_name, dto_name)?;
        let index = self.owned.len();
        self.owned.push(property);
        self.order.push(Slot::Owned(index));
        Ok(&mut self.owned[index])
    }

    /// Attach a mapping built elsewhere.
    pub fn attach_property(&mut self, property: Arc<dyn PropertyMapping>) -> &mut Self {
        self.order.push(Slot::Shared(property));
        self
    }

    /// All properties, in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &dyn PropertyMapping> + '_ {
        self.order.iter().map(move |slot| match slot {
            Slot::Owned(index) => &self.owned[*index] as &dyn PropertyMapping,
            Slot::Shared(property) => property.as_ref(),
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn resolve(registry: &TypeRegistry, identifier: &str) -> Result<Arc<TypeDescriptor>, Error> {
    registry
        .resolve(identifier)
        .ok_or_else(|| Error::UnknownClass {
            identifier: identifier.to_string(),
        })
}
