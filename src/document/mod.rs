//! Run-time document instances and their editorial lifecycle.
//!
//! A document is a JSON object validated against exactly one schema. Its
//! state machine is Draft → Valid → Published: validation promotes a clean
//! draft to Valid, publishing requires Valid, and any subsequent edit
//! returns the document to Draft. Failing validation never produces a
//! terminal state; it always returns to Draft.

pub mod store;

pub use store::DocumentStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::schema::types::{Field, FieldVariant, Schema, SchemaError, SchemaField};
use crate::schema::utils::{resolve_path, set_path};

/// Editorial state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentState {
    /// Under edit; validation state unknown or failing.
    #[default]
    Draft,
    /// The validator returned zero failures for the current content.
    Valid,
    /// Published to the content-query surface. Requires Valid.
    Published,
}

/// A concrete instance of data conforming to a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: Uuid,
    schema_name: String,
    created_at: DateTime<Utc>,
    data: Value,
    state: DocumentState,
}

impl Document {
    /// Creates an empty draft for the given schema, seeded with the
    /// schema's initial values (recursively for nested objects).
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        Self {
            id: Uuid::new_v4(),
            schema_name: schema.name.clone(),
            created_at: Utc::now(),
            data: Value::Object(seed_fields(schema.fields())),
            state: DocumentState::Draft,
        }
    }

    /// Wraps existing data (e.g. from a bulk import) as a draft. The data
    /// must be a JSON object.
    pub fn from_value(
        schema_name: impl Into<String>,
        data: Value,
    ) -> Result<Self, SchemaError> {
        if !data.is_object() {
            return Err(SchemaError::InvalidData(
                "Document data must be a JSON object".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            schema_name: schema_name.into(),
            created_at: Utc::now(),
            data,
            state: DocumentState::Draft,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    /// Reads a value at a dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        resolve_path(&self.data, path)
    }

    /// Writes a value at a dotted path. Any edit returns the document to
    /// Draft, whatever state it was in.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), SchemaError> {
        set_path(&mut self.data, path, value)?;
        self.state = DocumentState::Draft;
        Ok(())
    }

    /// Publishes the document. Only a Valid document can be published.
    pub fn publish(&mut self) -> Result<(), SchemaError> {
        match self.state {
            DocumentState::Valid => {
                self.state = DocumentState::Published;
                Ok(())
            }
            state => Err(SchemaError::NotPublishable(format!(
                "document {} is {state:?}; validate it first",
                self.id
            ))),
        }
    }

    /// Records a validation outcome: failures force Draft, a clean pass
    /// promotes a draft to Valid. A Published document that still
    /// validates clean stays Published.
    pub(crate) fn apply_validation(&mut self, valid: bool) {
        if !valid {
            self.state = DocumentState::Draft;
        } else if self.state == DocumentState::Draft {
            self.state = DocumentState::Valid;
        }
    }
}

fn seed_fields(fields: &[SchemaField]) -> Map<String, Value> {
    let mut map = Map::new();
    for field in fields {
        if let Some(initial) = field.variant.initial_value() {
            map.insert(field.name.clone(), initial.clone());
        } else if let Some(children) = sub_fields(&field.variant) {
            let nested = seed_fields(children);
            if !nested.is_empty() {
                map.insert(field.name.clone(), Value::Object(nested));
            }
        }
    }
    map
}

fn sub_fields(variant: &FieldVariant) -> Option<&[SchemaField]> {
    match variant {
        FieldVariant::Object(f) => Some(&f.fields),
        FieldVariant::Asset(f) => Some(&f.fields),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::RuleSet;
    use serde_json::json;

    fn modal_schema() -> Schema {
        Schema::new("freeIntroClass")
            .with_title("Free Introductory Class Modal")
            .with_fields(vec![
                SchemaField::string("title")
                    .with_rules(RuleSet::new().required())
                    .with_initial(json!("Join us for our Open House")),
                SchemaField::boolean("showModal").with_initial(json!(true)),
                SchemaField::number("delaySeconds").with_initial(json!(5)),
                SchemaField::object(
                    "cta",
                    vec![SchemaField::boolean("newTab").with_initial(json!(true))],
                ),
            ])
            .unwrap()
    }

    #[test]
    fn new_documents_are_seeded_drafts() {
        let doc = Document::new(&modal_schema());
        assert_eq!(doc.state(), DocumentState::Draft);
        assert_eq!(doc.get("title"), Some(&json!("Join us for our Open House")));
        assert_eq!(doc.get("delaySeconds"), Some(&json!(5)));
        assert_eq!(doc.get("cta.newTab"), Some(&json!(true)));
    }

    #[test]
    fn publish_requires_valid() {
        let mut doc = Document::new(&modal_schema());
        let err = doc.publish().unwrap_err();
        assert!(matches!(err, SchemaError::NotPublishable(_)));

        doc.apply_validation(true);
        assert_eq!(doc.state(), DocumentState::Valid);
        doc.publish().unwrap();
        assert_eq!(doc.state(), DocumentState::Published);
    }

    #[test]
    fn any_edit_returns_to_draft() {
        let mut doc = Document::new(&modal_schema());
        doc.apply_validation(true);
        doc.publish().unwrap();

        doc.set("title", json!("Updated")).unwrap();
        assert_eq!(doc.state(), DocumentState::Draft);
    }

    #[test]
    fn failing_validation_returns_to_draft() {
        let mut doc = Document::new(&modal_schema());
        doc.apply_validation(true);
        assert_eq!(doc.state(), DocumentState::Valid);

        doc.apply_validation(false);
        assert_eq!(doc.state(), DocumentState::Draft);
    }

    #[test]
    fn published_documents_stay_published_when_still_valid() {
        let mut doc = Document::new(&modal_schema());
        doc.apply_validation(true);
        doc.publish().unwrap();

        doc.apply_validation(true);
        assert_eq!(doc.state(), DocumentState::Published);
    }

    #[test]
    fn from_value_requires_an_object() {
        assert!(Document::from_value("infoBanner", json!([1, 2])).is_err());
        let doc = Document::from_value("infoBanner", json!({"showBanner": true})).unwrap();
        assert_eq!(doc.schema_name(), "infoBanner");
    }
}
