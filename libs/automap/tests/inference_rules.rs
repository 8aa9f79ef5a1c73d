#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Precedence and convention rules of the automatic mapper, exercised through
//! hand-built descriptors.

use automap::{
    AutoClassMapper, AutoMapConfig, ClassMapping, KeyType, MappingError, SchemaResolution,
    TypeDescriptor,
};
use uuid::Uuid;

fn infer(descriptor: &TypeDescriptor) -> ClassMapping {
    AutoClassMapper::new(descriptor).into_mapping()
}

fn legacy() -> AutoMapConfig {
    AutoMapConfig {
        schema_resolution: SchemaResolution::LegacyTable,
        ..AutoMapConfig::default()
    }
}

fn samples() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::builder("Empty").build(),
        TypeDescriptor::builder("Customer")
            .property::<i32>("Id")
            .property::<String>("FullName")
            .build(),
        TypeDescriptor::builder("Prefixed")
            .column_prefix("p_")
            .table("prefixed")
            .property_with::<Uuid>("ID", |p| p.map_to("pk"))
            .property_with::<String>("Note", |p| p.ignore().map_to("note"))
            .property::<bool>("Active")
            .build(),
        TypeDescriptor::builder("ManyIds")
            .property::<String>("Code")
            .property::<i64>("id")
            .property::<i64>("Id")
            .property::<i64>("ID")
            .build(),
    ]
}

#[test]
fn test_inference_is_idempotent() {
    for descriptor in samples() {
        assert_eq!(infer(&descriptor), infer(&descriptor), "{}", descriptor.name());
    }
}

#[test]
fn test_bindings_follow_declaration_order() {
    for descriptor in samples() {
        let mapping = infer(&descriptor);
        let expected: Vec<_> = descriptor.properties().iter().map(|p| p.name()).collect();
        let actual: Vec<_> = mapping.properties().iter().map(|p| p.name()).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_at_most_one_key() {
    for descriptor in samples() {
        let keys = infer(&descriptor)
            .properties()
            .iter()
            .filter(|p| p.is_key())
            .count();
        assert!(keys <= 1, "{} has {keys} keys", descriptor.name());
    }

    let many = infer(&samples()[3]);
    assert_eq!(many.key().map(|k| k.name()), Some("id"));
}

#[test]
fn test_ignore_wins_over_map_to_in_either_order() {
    let descriptor = TypeDescriptor::builder("Order")
        .property_with::<String>("A", |p| p.ignore().map_to("a"))
        .property_with::<String>("B", |p| p.map_to("b").ignore())
        .build();

    for binding in infer(&descriptor).properties() {
        assert!(binding.is_ignored());
        assert_eq!(binding.column_name(), None);
    }
}

#[test]
fn test_map_to_on_key_property_under_prefix() {
    let mapping = infer(&samples()[2]);
    let key = mapping.key().unwrap();

    assert_eq!(key.name(), "ID");
    assert_eq!(key.column_name(), Some("pk"));
    assert_eq!(key.key_type(), KeyType::Guid);
    assert_eq!(mapping.property("Active").unwrap().column_name(), Some("p_Active"));
}

#[test]
fn test_schema_annotation_sets_schema_identity() {
    let descriptor = TypeDescriptor::builder("Invoice").schema("billing").build();
    let mapping = infer(&descriptor);

    assert_eq!(mapping.table(), "Invoice");
    assert_eq!(mapping.schema(), Some("billing"));
}

#[test]
fn test_schema_call_without_annotation_uses_default() {
    let descriptor = TypeDescriptor::builder("Invoice").build();
    let mut mapper = AutoClassMapper::new(&descriptor);
    assert_eq!(mapper.mapping().schema(), None);

    mapper.schema("archive");
    assert_eq!(mapper.mapping().schema(), Some("archive"));
    assert_eq!(mapper.mapping().table(), "Invoice");
}

#[test]
fn test_schema_annotation_beats_configured_default_schema() {
    let config = AutoMapConfig {
        default_schema: Some("dbo".to_owned()),
        ..AutoMapConfig::default()
    };
    let annotated = TypeDescriptor::builder("Invoice").schema("billing").build();
    let plain = TypeDescriptor::builder("Receipt").build();

    assert_eq!(
        AutoClassMapper::with_config(&annotated, config.clone()).mapping().schema(),
        Some("billing")
    );
    assert_eq!(
        AutoClassMapper::with_config(&plain, config).mapping().schema(),
        Some("dbo")
    );
}

#[test]
fn test_legacy_schema_resolution_overwrites_table() {
    let descriptor = TypeDescriptor::builder("Invoice")
        .table("invoices")
        .schema("billing")
        .build();
    let mut mapper = AutoClassMapper::with_config(&descriptor, legacy());

    // Construction leaves the schema alone in legacy mode.
    assert_eq!(mapper.mapping().table(), "invoices");
    assert_eq!(mapper.mapping().schema(), None);

    mapper.schema("ignored_default");
    assert_eq!(mapper.mapping().table(), "billing");
    assert_eq!(mapper.mapping().schema(), None);
}

#[test]
fn test_legacy_schema_resolution_without_annotation() {
    let descriptor = TypeDescriptor::builder("Invoice").build();
    let mut mapper = AutoClassMapper::with_config(&descriptor, legacy());

    mapper.schema("archive");
    assert_eq!(mapper.mapping().table(), "archive");
    assert_eq!(mapper.mapping().schema(), None);
}

#[test]
fn test_manual_key_after_inference() {
    let descriptor = TypeDescriptor::builder("Token")
        .property::<Uuid>("Uid")
        .property::<String>("Value")
        .build();
    let mut mapping = infer(&descriptor);
    assert!(mapping.key().is_none());

    mapping.set_key("Uid", KeyType::Guid).unwrap();
    assert_eq!(mapping.key().map(|k| k.name()), Some("Uid"));

    let err = mapping.set_key("Missing", KeyType::Assigned).unwrap_err();
    assert_eq!(err.to_string(), "entity 'Token' has no property 'Missing'");
    assert!(matches!(err, MappingError::UnknownProperty { .. }));
}

#[test]
fn test_mappings_are_independent_values() {
    let samples = samples();
    let mut first = infer(&samples[1]);
    first.set_table("renamed");

    let second = infer(&samples[1]);
    assert_eq!(second.table(), "Customer");
}
