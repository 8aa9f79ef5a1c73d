//! Mapping result: table identity, schema identity and per-property bindings.

use crate::descriptor::{PropertyDescriptor, PropertyType};
use crate::error::MappingError;
use crate::key_type::KeyType;
use serde::Serialize;

/// Binding of one entity property to a destination column, or its suppression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyMap {
    name: String,
    property_type: PropertyType,
    column: Option<String>,
    ignored: bool,
    key_type: KeyType,
}

impl PropertyMap {
    /// Binding with the column named after the property.
    #[must_use]
    pub fn new(property: &PropertyDescriptor) -> Self {
        Self {
            name: property.name().to_owned(),
            property_type: property.property_type(),
            column: Some(property.name().to_owned()),
            ignored: false,
            key_type: KeyType::NotAKey,
        }
    }

    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Suppress the binding; the column becomes absent.
    #[must_use]
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self.column = None;
        self
    }

    #[must_use]
    pub fn key(mut self, key_type: KeyType) -> Self {
        self.key_type = key_type;
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

    /// Destination column, `None` when the property is ignored.
    #[must_use]
    pub fn column_name(&self) -> Option<&str> {
        self.column.as_deref()
    }

    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        self.ignored
    }

    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }

    #[must_use]
    pub const fn is_key(&self) -> bool {
        self.key_type.is_key()
    }
}

/// Persistence mapping of one entity type.
///
/// Holds at most one key binding. Bindings keep the declaration order of the
/// entity's properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassMapping {
    entity: String,
    table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    properties: Vec<PropertyMap>,
}

impl ClassMapping {
    #[must_use]
    pub fn new(entity: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            table: table.into(),
            schema: None,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// `schema.table` when a schema is set, otherwise the bare table name.
    #[must_use]
    pub fn qualified_table(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.table),
            None => self.table.clone(),
        }
    }

    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table = table.into();
    }

    pub fn set_schema(&mut self, schema: Option<String>) {
        self.schema = schema;
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertyMap] {
        &self.properties
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyMap> {
        self.properties.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn key(&self) -> Option<&PropertyMap> {
        self.properties.iter().find(|p| p.is_key())
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.properties.iter().any(PropertyMap::is_key)
    }

    /// `(property, column)` pairs of every persisted binding, in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .filter_map(|p| p.column_name().map(|column| (p.name(), column)))
    }

    /// Append a binding.
    ///
    /// # Errors
    /// Returns [`MappingError::DuplicateProperty`] if the property is already bound.
    pub fn push(&mut self, property: PropertyMap) -> Result<&mut PropertyMap, MappingError> {
        if self.property(&property.name).is_some() {
            return Err(MappingError::DuplicateProperty {
                entity: self.entity.clone(),
                property: property.name,
            });
        }
        let index = self.properties.len();
        self.properties.push(property);
        Ok(&mut self.properties[index])
    }

    /// Designate `property` as the key, demoting any previous key.
    ///
    /// # Errors
    /// Returns [`MappingError::NotAKeyType`] for [`KeyType::NotAKey`],
    /// [`MappingError::UnknownProperty`] when no binding has that name and
    /// [`MappingError::IgnoredKey`] when the binding is ignored.
    pub fn set_key(&mut self, property: &str, key_type: KeyType) -> Result<(), MappingError> {
        if !key_type.is_key() {
            return Err(MappingError::NotAKeyType {
                property: property.to_owned(),
            });
        }
        match self.property(property) {
            None => {
                return Err(MappingError::UnknownProperty {
                    entity: self.entity.clone(),
                    property: property.to_owned(),
                });
            }
            Some(binding) if binding.is_ignored() => {
                return Err(MappingError::IgnoredKey {
                    entity: self.entity.clone(),
                    property: property.to_owned(),
                });
            }
            Some(_) => {}
        }
        for binding in &mut self.properties {
            binding.key_type = if binding.name == property {
                key_type
            } else {
                KeyType::NotAKey
            };
        }
        tracing::debug!(entity = %self.entity, property, %key_type, "key designated explicitly");
        Ok(())
    }
}
