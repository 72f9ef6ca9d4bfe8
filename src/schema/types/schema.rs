use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::schema::preview::PreviewSpec;
use crate::schema::types::field::{FieldVariant, SchemaField};
use crate::schema::types::SchemaError;

/// Whether a schema describes a standalone document or a reusable nested
/// object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Document,
    Object,
}

/// Named shape describing a document's allowed fields and constraints.
///
/// A schema defines:
/// - The document type's name and editorial title
/// - Field definitions in declaration order, with their rules
/// - An optional preview projection for editorial list views
///
/// Schemas are immutable once registered; field names are unique within
/// each nesting level, enforced at construction.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    pub title: String,
    pub kind: SchemaKind,
    fields: Vec<SchemaField>,
    pub preview: Option<PreviewSpec>,
}

impl Schema {
    /// Creates a new document schema with the specified name. The title
    /// defaults to the name until overridden.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            kind: SchemaKind::Document,
            fields: Vec::new(),
            preview: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_kind(mut self, kind: SchemaKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_preview(mut self, preview: PreviewSpec) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Sets all fields at once. Fails when any nesting level repeats a
    /// field name.
    pub fn with_fields(mut self, fields: Vec<SchemaField>) -> Result<Self, SchemaError> {
        ensure_unique_names(&fields, &self.name)?;
        self.fields = fields;
        Ok(self)
    }

    /// Appends a single field. Fails on a duplicate name at the top level
    /// or inside the field's own nested levels.
    pub fn add_field(&mut self, field: SchemaField) -> Result<(), SchemaError> {
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(SchemaError::InvalidField(format!(
                "Duplicate field name '{}' in schema '{}'",
                field.name, self.name
            )));
        }
        ensure_unique_names(std::slice::from_ref(&field), &self.name)?;
        self.fields.push(field);
        Ok(())
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Looks up a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Walks a field list and rejects duplicate names per nesting level, as
/// well as empty names anywhere.
fn ensure_unique_names(fields: &[SchemaField], scope: &str) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.is_empty() {
            return Err(SchemaError::InvalidField(format!(
                "Field name cannot be empty in '{scope}'"
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::InvalidField(format!(
                "Duplicate field name '{}' in '{scope}'",
                field.name
            )));
        }
        ensure_unique_in_variant(&field.variant, &format!("{scope}.{}", field.name))?;
    }
    Ok(())
}

fn ensure_unique_in_variant(variant: &FieldVariant, scope: &str) -> Result<(), SchemaError> {
    match variant {
        FieldVariant::Object(f) => ensure_unique_names(&f.fields, scope),
        FieldVariant::Asset(f) => ensure_unique_names(&f.fields, scope),
        FieldVariant::Array(f) => ensure_unique_in_variant(&f.element, scope),
        FieldVariant::Scalar(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_field_rejects_duplicates() {
        let mut schema = Schema::new("infoBanner");
        schema.add_field(SchemaField::string("ctaText")).unwrap();
        let err = schema.add_field(SchemaField::boolean("ctaText")).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField(_)));
    }

    #[test]
    fn nested_duplicates_are_rejected() {
        let result = Schema::new("heroSection").with_fields(vec![SchemaField::object(
            "title",
            vec![SchemaField::string("first"), SchemaField::string("first")],
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn same_name_at_different_levels_is_allowed() {
        let result = Schema::new("landingPageAbout").with_fields(vec![
            SchemaField::string("title"),
            SchemaField::object("seo", vec![SchemaField::string("title")]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn empty_field_names_are_rejected() {
        let mut schema = Schema::new("test");
        assert!(schema.add_field(SchemaField::string("")).is_err());
    }

    #[test]
    fn title_defaults_to_name() {
        let schema = Schema::new("freeIntroClass");
        assert_eq!(schema.title, "freeIntroClass");
        let schema = Schema::new("freeIntroClass").with_title("Free Introductory Class Modal");
        assert_eq!(schema.title, "Free Introductory Class Modal");
    }
}
