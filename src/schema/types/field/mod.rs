pub mod common;
pub mod variant;

pub use common::{Field, FieldCommon};
pub use variant::{ArrayField, AssetField, AssetKind, FieldVariant, ObjectField, ScalarField, ScalarKind};

use serde_json::Value;

use crate::schema::types::rules::{Condition, RuleSet};

/// One named, typed slot within a schema.
///
/// Constructed through the typed shortcuts and configured with the fluent
/// `with_*` builders:
///
/// ```
/// use contentfold::schema::types::{RuleSet, SchemaField};
///
/// let tagline = SchemaField::string("tagline")
///     .with_title("Tagline")
///     .with_rules(RuleSet::new().max(120.0));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: String,
    pub variant: FieldVariant,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, variant: FieldVariant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::String)))
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::Text)))
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::Boolean)))
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::Number)))
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::Datetime)))
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::Url)))
    }

    pub fn slug(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Scalar(ScalarField::new(ScalarKind::Slug)))
    }

    pub fn image(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Asset(AssetField::new(AssetKind::Image)))
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldVariant::Asset(AssetField::new(AssetKind::File)))
    }

    pub fn object(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self::new(name, FieldVariant::Object(ObjectField::new(fields)))
    }

    pub fn array(name: impl Into<String>, element: FieldVariant) -> Self {
        Self::new(name, FieldVariant::Array(ArrayField::new(element)))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.variant.set_title(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.variant.set_description(description.into());
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.variant.set_rules(rules);
        self
    }

    /// Hides the field while the condition holds. A hidden field's rules do
    /// not run; its stored value is retained but unvalidated.
    pub fn hidden_when(mut self, condition: Condition) -> Self {
        self.variant.set_hidden(condition);
        self
    }

    pub fn with_initial(mut self, value: Value) -> Self {
        self.variant.set_initial_value(value);
        self
    }

    /// Attaches editorial sub-fields to an asset field (e.g. alt text on an
    /// image). No-op for other variants.
    pub fn with_asset_fields(mut self, fields: Vec<SchemaField>) -> Self {
        if let FieldVariant::Asset(asset) = &mut self.variant {
            asset.fields = fields;
        }
        self
    }
}
