//! Automatic mapper: infers a [`ClassMapping`] from a [`TypeDescriptor`].
//!
//! Precedence per property: `Ignore` > `MapTo` > type column prefix > property name.
//! The first property named `id` (ASCII case-insensitive) becomes the key unless a
//! key already exists; its key type comes from [`key_type_for`].

use crate::annotation::{Annotated, AnnotationKind};
use crate::config::{AutoMapConfig, SchemaResolution};
use crate::descriptor::{Entity, TypeDescriptor};
use crate::key_type::key_type_for;
use crate::mapping::{ClassMapping, PropertyMap};

/// Property name promoted to key by convention.
pub const KEY_PROPERTY_NAME: &str = "id";

/// Mapper combining naming conventions with the annotations of a type.
///
/// # Example
///
/// ```rust
/// use automap::{AutoClassMapper, KeyType, TypeDescriptor};
///
/// let descriptor = TypeDescriptor::builder("Customer")
///     .property::<i32>("Id")
///     .property::<String>("FullName")
///     .build();
///
/// let mapping = AutoClassMapper::new(&descriptor).into_mapping();
/// assert_eq!(mapping.table(), "Customer");
/// assert_eq!(mapping.key().map(|k| k.key_type()), Some(KeyType::Identity));
/// ```
#[derive(Debug)]
pub struct AutoClassMapper<'a> {
    descriptor: &'a TypeDescriptor,
    config: AutoMapConfig,
    mapping: ClassMapping,
}

impl AutoClassMapper<'static> {
    /// Mapper for an [`Entity`] using its cached descriptor.
    #[must_use]
    pub fn for_entity<E: Entity>(config: AutoMapConfig) -> Self {
        Self::with_config(E::descriptor(), config)
    }
}

impl<'a> AutoClassMapper<'a> {
    #[must_use]
    pub fn new(descriptor: &'a TypeDescriptor) -> Self {
        Self::with_config(descriptor, AutoMapConfig::default())
    }

    /// Build the mapping: resolve table (and schema), then infer bindings.
    #[must_use]
    pub fn with_config(descriptor: &'a TypeDescriptor, config: AutoMapConfig) -> Self {
        let default_table = config.default_table_name(descriptor.name());
        let mut mapper = Self {
            descriptor,
            mapping: ClassMapping::new(descriptor.name(), default_table.clone()),
            config,
        };

        mapper.table(&default_table);
        match mapper.config.schema_resolution {
            SchemaResolution::Schema => {
                let default_schema = mapper.config.default_schema.clone();
                if default_schema.is_some() || descriptor.has_annotation(AnnotationKind::SchemaName) {
                    mapper.schema(default_schema.as_deref().unwrap_or_default());
                }
            }
            SchemaResolution::LegacyTable => {
                if let Some(default_schema) = &mapper.config.default_schema {
                    tracing::warn!(
                        entity = %descriptor.name(),
                        default_schema = %default_schema,
                        "default schema is not applied with legacy_table schema resolution"
                    );
                }
            }
        }
        mapper.infer_bindings();

        tracing::debug!(
            entity = %descriptor.name(),
            table = %mapper.mapping.table(),
            schema = ?mapper.mapping.schema(),
            bindings = mapper.mapping.properties().len(),
            key = ?mapper.mapping.key().map(PropertyMap::name),
            "entity mapping inferred"
        );
        mapper
    }

    /// Set the table identity; a table-name annotation on the type wins over `default`.
    pub fn table(&mut self, default: &str) -> &mut Self {
        let descriptor = self.descriptor;
        let table = match descriptor.payload(AnnotationKind::TableName) {
            Some(annotated) => {
                tracing::debug!(entity = %descriptor.name(), table = annotated, "table name taken from annotation");
                annotated
            }
            None => default,
        };
        self.mapping.set_table(table);
        self
    }

    /// Resolve the schema; a schema-name annotation on the type wins over `default`.
    ///
    /// With [`SchemaResolution::LegacyTable`] the result replaces the table name
    /// instead of setting the schema.
    pub fn schema(&mut self, default: &str) -> &mut Self {
        let descriptor = self.descriptor;
        let schema = match descriptor.payload(AnnotationKind::SchemaName) {
            Some(annotated) => {
                tracing::debug!(entity = %descriptor.name(), schema = annotated, "schema name taken from annotation");
                annotated
            }
            None => default,
        };
        match self.config.schema_resolution {
            SchemaResolution::Schema => self.mapping.set_schema(Some(schema.to_owned())),
            SchemaResolution::LegacyTable => self.mapping.set_table(schema),
        }
        self
    }

    fn infer_bindings(&mut self) {
        let descriptor = self.descriptor;
        let prefix = descriptor
            .payload(AnnotationKind::ColumnPrefix)
            .unwrap_or_default();

        for property in descriptor.properties() {
            let binding = PropertyMap::new(property);
            let binding = if property.has_annotation(AnnotationKind::Ignore) {
                binding.ignore()
            } else if let Some(column) = property.payload(AnnotationKind::MapTo) {
                binding.column(column)
            } else if !prefix.is_empty() {
                binding.column(format!("{prefix}{}", property.name()))
            } else {
                binding
            };

            let binding = if !binding.is_ignored()
                && !self.mapping.has_key()
                && property.name().eq_ignore_ascii_case(KEY_PROPERTY_NAME)
            {
                binding.key(key_type_for(property.property_type()))
            } else {
                binding
            };

            tracing::trace!(
                entity = %descriptor.name(),
                property = %binding.name(),
                column = ?binding.column_name(),
                key_type = %binding.key_type(),
                "property bound"
            );

            // Descriptors come from struct fields or the builder; a repeated name is
            // a caller bug and the first binding is kept.
            if let Err(err) = self.mapping.push(binding) {
                tracing::warn!(error = %err, "duplicate property skipped");
            }
        }
    }

    #[must_use]
    pub const fn mapping(&self) -> &ClassMapping {
        &self.mapping
    }

    #[must_use]
    pub fn into_mapping(self) -> ClassMapping {
        self.mapping
    }
}
