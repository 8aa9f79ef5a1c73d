//! # automap-macros
//!
//! `#[derive(Entity)]` for the `automap` crate.
//!
//! Generates an `automap::Entity` impl whose descriptor lists the struct's named
//! fields in declaration order together with the annotations given through
//! `#[automap(...)]`. The descriptor is built once and cached.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;
use syn::{DeriveInput, parse_macro_input};

mod entity;

/// Derive macro for `automap::Entity`.
///
/// Every named field is a property, whatever its visibility: struct fields are
/// the entity's persisted state. Exclude a field with `#[automap(ignore)]`.
///
/// # Attributes
///
/// On the struct:
/// - `table = "name"` - destination table (default: the struct name)
/// - `schema = "name"` - destination schema
/// - `prefix = "pfx_"` - prepended to every convention-derived column
///
/// On a field:
/// - `ignore` - not persisted
/// - `map_to = "column"` - explicit column name, the prefix does not apply
///
/// # Example
///
/// ```ignore
/// use automap::Entity;
///
/// #[derive(Entity)]
/// #[automap(table = "orders", schema = "sales")]
/// pub struct Order {
///     pub id: uuid::Uuid,
///     #[automap(map_to = "order_no")]
///     pub number: String,
///     #[automap(ignore)]
///     pub cached_total: Option<i64>,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(automap))]
#[proc_macro_error]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand_derive_entity(&input).into()
}
