//! Key-type classification and the default classification per property type.

use crate::descriptor::PropertyType;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

/// How the value of a key property is populated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// The property is not part of the key.
    #[default]
    NotAKey,
    /// Generated by the storage on insert (auto-increment / identity column).
    Identity,
    /// Generated by a storage trigger on insert.
    TriggerIdentity,
    /// Taken from a storage sequence.
    Sequence,
    /// Generated client side as a random UUID before insert.
    Guid,
    /// Supplied by the caller.
    Assigned,
}

impl KeyType {
    #[must_use]
    pub const fn is_key(self) -> bool {
        !matches!(self, KeyType::NotAKey)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyType::NotAKey => "not_a_key",
            KeyType::Identity => "identity",
            KeyType::TriggerIdentity => "trigger_identity",
            KeyType::Sequence => "sequence",
            KeyType::Guid => "guid",
            KeyType::Assigned => "assigned",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static DEFAULT_KEY_TYPES: LazyLock<HashMap<TypeId, KeyType>> = LazyLock::new(|| {
    HashMap::from([
        (TypeId::of::<i8>(), KeyType::Identity),
        (TypeId::of::<i16>(), KeyType::Identity),
        (TypeId::of::<i32>(), KeyType::Identity),
        (TypeId::of::<i64>(), KeyType::Identity),
        (TypeId::of::<i128>(), KeyType::Identity),
        (TypeId::of::<isize>(), KeyType::Identity),
        (TypeId::of::<u8>(), KeyType::Identity),
        (TypeId::of::<u16>(), KeyType::Identity),
        (TypeId::of::<u32>(), KeyType::Identity),
        (TypeId::of::<u64>(), KeyType::Identity),
        (TypeId::of::<u128>(), KeyType::Identity),
        (TypeId::of::<usize>(), KeyType::Identity),
        (TypeId::of::<Uuid>(), KeyType::Guid),
    ])
});

/// Default classification for a key inferred by naming convention.
///
/// Returns `None` for types outside the table; callers fall back to
/// [`KeyType::Assigned`] (see [`key_type_for`]).
#[must_use]
pub fn default_key_type(property_type: PropertyType) -> Option<KeyType> {
    DEFAULT_KEY_TYPES.get(&property_type.type_id()).copied()
}

/// [`default_key_type`] with the `Assigned` fallback applied.
#[must_use]
pub fn key_type_for(property_type: PropertyType) -> KeyType {
    default_key_type(property_type).unwrap_or(KeyType::Assigned)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_integers_default_to_identity() {
        let integers = [
            PropertyType::of::<i8>(),
            PropertyType::of::<i16>(),
            PropertyType::of::<i32>(),
            PropertyType::of::<i64>(),
            PropertyType::of::<i128>(),
            PropertyType::of::<isize>(),
            PropertyType::of::<u8>(),
            PropertyType::of::<u16>(),
            PropertyType::of::<u32>(),
            PropertyType::of::<u64>(),
            PropertyType::of::<u128>(),
            PropertyType::of::<usize>(),
        ];
        for ty in integers {
            assert_eq!(default_key_type(ty), Some(KeyType::Identity), "{ty:?}");
        }
    }

    #[test]
    fn test_uuid_defaults_to_guid() {
        assert_eq!(default_key_type(PropertyType::of::<Uuid>()), Some(KeyType::Guid));
    }

    #[test]
    fn test_table_is_exhaustive() {
        assert_eq!(DEFAULT_KEY_TYPES.len(), 13);
    }

    #[test]
    fn test_unmapped_types_fall_back_to_assigned() {
        let unmapped = [
            PropertyType::of::<String>(),
            PropertyType::of::<&'static str>(),
            PropertyType::of::<bool>(),
            PropertyType::of::<f64>(),
            PropertyType::of::<Option<i32>>(),
            PropertyType::of::<Option<Uuid>>(),
            PropertyType::of::<Vec<u8>>(),
        ];
        for ty in unmapped {
            assert_eq!(default_key_type(ty), None, "{ty:?}");
            assert_eq!(key_type_for(ty), KeyType::Assigned, "{ty:?}");
        }
    }

    #[test]
    fn test_is_key() {
        assert!(!KeyType::NotAKey.is_key());
        assert!(KeyType::Identity.is_key());
        assert!(KeyType::Assigned.is_key());
        assert_eq!(KeyType::default(), KeyType::NotAKey);
        assert_eq!(KeyType::TriggerIdentity.to_string(), "trigger_identity");
    }
}
