//! Process-wide cache of entity mappings.
//!
//! Each entity type is mapped once, on first request, and the resulting
//! [`ClassMapping`] is shared as an `Arc` afterwards.

use crate::config::AutoMapConfig;
use crate::descriptor::Entity;
use crate::mapper::AutoClassMapper;
use crate::mapping::ClassMapping;
use dashmap::DashMap;
use std::any::{TypeId, type_name};
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<MapperRegistry> = LazyLock::new(MapperRegistry::default);

/// Mapping cache keyed by entity type.
#[derive(Debug, Default)]
pub struct MapperRegistry {
    config: AutoMapConfig,
    mappings: DashMap<TypeId, Arc<ClassMapping>>,
}

impl MapperRegistry {
    #[must_use]
    pub fn new(config: AutoMapConfig) -> Self {
        Self {
            config,
            mappings: DashMap::new(),
        }
    }

    /// Shared registry using the default configuration.
    #[must_use]
    pub fn global() -> &'static MapperRegistry {
        &GLOBAL
    }

    #[must_use]
    pub const fn config(&self) -> &AutoMapConfig {
        &self.config
    }

    /// Mapping of `E`, inferred on first use.
    #[must_use]
    pub fn get<E: Entity>(&self) -> Arc<ClassMapping> {
        let key = TypeId::of::<E>();
        if let Some(mapping) = self.mappings.get(&key) {
            tracing::trace!(entity = type_name::<E>(), "mapping cache hit");
            return Arc::clone(mapping.value());
        }

        // The entry lock serializes concurrent first requests for the same type.
        let mapping = self.mappings.entry(key).or_insert_with(|| {
            Arc::new(AutoClassMapper::for_entity::<E>(self.config.clone()).into_mapping())
        });
        Arc::clone(mapping.value())
    }

    /// Register a mapping for `E`, replacing whatever was cached.
    ///
    /// Returns the previous mapping, if any.
    pub fn insert<E: Entity>(&self, mapping: ClassMapping) -> Option<Arc<ClassMapping>> {
        tracing::debug!(entity = type_name::<E>(), table = %mapping.table(), "mapping registered");
        self.mappings.insert(TypeId::of::<E>(), Arc::new(mapping))
    }

    #[must_use]
    pub fn contains<E: Entity>(&self) -> bool {
        self.mappings.contains_key(&TypeId::of::<E>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn clear(&self) {
        self.mappings.clear();
    }
}
