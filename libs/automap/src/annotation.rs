//! Declarative annotations attached to entity types and their properties.
//!
//! The set of annotation kinds is closed: a type may carry a table name, a schema
//! name and a column prefix; a property may carry a column override (`MapTo`) or be
//! suppressed (`Ignore`). Payloads are trusted verbatim, no validation happens here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of an [`Annotation`], used for capability lookups.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    TableName,
    SchemaName,
    ColumnPrefix,
    MapTo,
    Ignore,
}

impl AnnotationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::TableName => "table_name",
            AnnotationKind::SchemaName => "schema_name",
            AnnotationKind::ColumnPrefix => "column_prefix",
            AnnotationKind::MapTo => "map_to",
            AnnotationKind::Ignore => "ignore",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An annotation together with its payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Annotation {
    /// Destination table for the entity type.
    TableName(String),
    /// Destination schema for the entity type.
    SchemaName(String),
    /// Prefix prepended to every convention-derived column name.
    ColumnPrefix(String),
    /// Explicit destination column for a property.
    MapTo(String),
    /// The property is not persisted.
    Ignore,
}

impl Annotation {
    #[must_use]
    pub const fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::TableName(_) => AnnotationKind::TableName,
            Annotation::SchemaName(_) => AnnotationKind::SchemaName,
            Annotation::ColumnPrefix(_) => AnnotationKind::ColumnPrefix,
            Annotation::MapTo(_) => AnnotationKind::MapTo,
            Annotation::Ignore => AnnotationKind::Ignore,
        }
    }

    /// String payload, `None` for [`Annotation::Ignore`].
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match self {
            Annotation::TableName(v)
            | Annotation::SchemaName(v)
            | Annotation::ColumnPrefix(v)
            | Annotation::MapTo(v) => Some(v),
            Annotation::Ignore => None,
        }
    }
}

/// Annotations carried by a single target, at most one per kind.
///
/// Insertion order is preserved for display purposes only; lookups are by kind.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Attach an annotation, replacing any previous annotation of the same kind.
    pub fn insert(&mut self, annotation: Annotation) {
        let kind = annotation.kind();
        if let Some(slot) = self.0.iter_mut().find(|a| a.kind() == kind) {
            *slot = annotation;
        } else {
            self.0.push(annotation);
        }
    }

    #[must_use]
    pub fn get(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.0.iter().find(|a| a.kind() == kind)
    }

    #[must_use]
    pub fn contains(&self, kind: AnnotationKind) -> bool {
        self.get(kind).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.0.iter()
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        let mut annotations = Self::new();
        for annotation in iter {
            annotations.insert(annotation);
        }
        annotations
    }
}

/// Capability lookup over annotated targets (entity types and properties).
pub trait Annotated {
    fn annotations(&self) -> &Annotations;

    /// Returns `true` when the target carries an annotation of `kind`.
    fn has_annotation(&self, kind: AnnotationKind) -> bool {
        self.annotations().contains(kind)
    }

    fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations().get(kind)
    }

    /// Payload of the annotation of `kind`, if present and carrying one.
    fn payload(&self, kind: AnnotationKind) -> Option<&str> {
        self.annotation(kind).and_then(Annotation::payload)
    }
}
