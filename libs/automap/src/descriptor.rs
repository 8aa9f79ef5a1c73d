//! Entity shape: the ordered public properties of a type plus its annotations.
//!
//! Descriptors are either generated by `#[derive(Entity)]` or assembled by hand
//! through [`TypeDescriptor::builder`]. Either way they are built once per type and
//! kept for the lifetime of the process.

use crate::annotation::{Annotated, Annotation, Annotations};
use serde::{Serialize, Serializer};
use std::any::{TypeId, type_name};
use std::fmt;

/// Declared Rust type of a property.
///
/// Identity is the [`TypeId`]; the type name is kept for diagnostics only.
#[derive(Copy, Clone, Eq)]
pub struct PropertyType {
    id: TypeId,
    name: &'static str,
}

impl PropertyType {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for PropertyType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for PropertyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// One declared property of an entity type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    name: String,
    property_type: PropertyType,
    annotations: Annotations,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::with_type(name, PropertyType::of::<T>())
    }

    #[must_use]
    pub fn with_type(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            annotations: Annotations::new(),
        }
    }

    /// Replace the column with an explicit name.
    #[must_use]
    pub fn map_to(self, column: impl Into<String>) -> Self {
        self.annotate(Annotation::MapTo(column.into()))
    }

    /// Exclude the property from persistence.
    #[must_use]
    pub fn ignore(self) -> Self {
        self.annotate(Annotation::Ignore)
    }

    #[must_use]
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn property_type(&self) -> PropertyType {
        self.property_type
    }
}

impl Annotated for PropertyDescriptor {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}

/// The entity type under mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    name: String,
    annotations: Annotations,
    properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            descriptor: TypeDescriptor {
                name: name.into(),
                annotations: Annotations::new(),
                properties: Vec::new(),
            },
        }
    }

    /// Type name, the conventional default table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }
}

impl Annotated for TypeDescriptor {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}

/// Builder for hand-registered descriptors.
///
/// # Example
///
/// ```rust
/// use automap::{Annotated, AnnotationKind, TypeDescriptor};
///
/// let descriptor = TypeDescriptor::builder("Customer")
///     .table("customers")
///     .property::<i32>("Id")
///     .property_with::<String>("FullName", |p| p.map_to("full_name"))
///     .build();
///
/// assert_eq!(descriptor.payload(AnnotationKind::TableName), Some("customers"));
/// assert_eq!(descriptor.properties().len(), 2);
/// ```
#[derive(Debug)]
#[must_use]
pub struct TypeDescriptorBuilder {
    descriptor: TypeDescriptor,
}

impl TypeDescriptorBuilder {
    pub fn table(self, name: impl Into<String>) -> Self {
        self.annotate(Annotation::TableName(name.into()))
    }

    pub fn schema(self, name: impl Into<String>) -> Self {
        self.annotate(Annotation::SchemaName(name.into()))
    }

    pub fn column_prefix(self, prefix: impl Into<String>) -> Self {
        self.annotate(Annotation::ColumnPrefix(prefix.into()))
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.descriptor.annotations.insert(annotation);
        self
    }

    pub fn property<T: ?Sized + 'static>(self, name: impl Into<String>) -> Self {
        self.push(PropertyDescriptor::new::<T>(name))
    }

    /// Declare a property and adjust it (annotations) through `f`.
    pub fn property_with<T: ?Sized + 'static>(
        self,
        name: impl Into<String>,
        f: impl FnOnce(PropertyDescriptor) -> PropertyDescriptor,
    ) -> Self {
        self.push(f(PropertyDescriptor::new::<T>(name)))
    }

    pub fn push(mut self, property: PropertyDescriptor) -> Self {
        self.descriptor.properties.push(property);
        self
    }

    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}

/// A type that can be mapped to a table.
///
/// Implemented by `#[derive(Entity)]`. A manual implementation should cache the
/// descriptor the same way the derive does:
///
/// ```rust
/// use automap::{Entity, TypeDescriptor};
/// use std::sync::OnceLock;
///
/// struct Order {
///     id: i64,
/// }
///
/// impl Entity for Order {
///     fn descriptor() -> &'static TypeDescriptor {
///         static DESCRIPTOR: OnceLock<TypeDescriptor> = OnceLock::new();
///         DESCRIPTOR.get_or_init(|| TypeDescriptor::builder("Order").property::<i64>("id").build())
///     }
/// }
///
/// assert_eq!(Order::descriptor().name(), "Order");
/// ```
pub trait Entity: 'static {
    fn descriptor() -> &'static TypeDescriptor;
}
