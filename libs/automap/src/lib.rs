//! # automap
//!
//! Derives the persistence mapping of an entity type (table, schema, columns and
//! primary key) from the type's shape and a small set of annotations, so callers do
//! not hand-write a mapping for every field.
//!
//! Rules, in order of precedence:
//! - `#[automap(table = "...")]` / `#[automap(schema = "...")]` override the
//!   conventional table (type name) and schema
//! - a property marked `#[automap(ignore)]` is not persisted
//! - `#[automap(map_to = "...")]` names the column explicitly
//! - `#[automap(prefix = "...")]` on the type is prepended to every other column
//! - the first property named `id` (any casing) becomes the key
//!
//! # Example
//!
//! ```rust
//! use automap::{Entity, KeyType, MapperRegistry};
//!
//! #[derive(Entity)]
//! #[automap(table = "customers", prefix = "cst_")]
//! pub struct Customer {
//!     pub id: i64,
//!     pub full_name: String,
//!     #[automap(map_to = "email_address")]
//!     pub email: String,
//!     #[automap(ignore)]
//!     pub display_label: String,
//! }
//!
//! let mapping = MapperRegistry::global().get::<Customer>();
//! assert_eq!(mapping.table(), "customers");
//!
//! let columns: Vec<_> = mapping.columns().map(|(_, column)| column).collect();
//! assert_eq!(columns, ["cst_id", "cst_full_name", "email_address"]);
//! assert_eq!(mapping.key().map(|k| k.key_type()), Some(KeyType::Identity));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod annotation;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod key_type;
pub mod mapper;
pub mod mapping;
pub mod registry;

pub use annotation::{Annotated, Annotation, AnnotationKind, Annotations};
pub use config::{AutoMapConfig, SchemaResolution, TableNaming};
pub use descriptor::{Entity, PropertyDescriptor, PropertyType, TypeDescriptor, TypeDescriptorBuilder};
pub use error::{ConfigError, MappingError};
pub use key_type::{KeyType, default_key_type, key_type_for};
pub use mapper::AutoClassMapper;
pub use mapping::{ClassMapping, PropertyMap};
pub use registry::MapperRegistry;

#[cfg(feature = "derive")]
pub use automap_macros::Entity;
