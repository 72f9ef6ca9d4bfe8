use serde_json::Value;
use serde::{Deserialize, Serialize};

use crate::schema::types::field::common::{impl_field, Field, FieldCommon};
use crate::schema::types::field::SchemaField;
use crate::schema::types::rules::{Condition, RuleSet};

/// Kinds of single-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Text,
    Boolean,
    Number,
    Datetime,
    Url,
    Slug,
}

/// Kinds of asset-reference fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    File,
}

/// Field holding a single scalar value.
#[derive(Debug, Clone)]
pub struct ScalarField {
    pub(crate) inner: FieldCommon,
    pub kind: ScalarKind,
}

impl ScalarField {
    pub fn new(kind: ScalarKind) -> Self {
        Self {
            inner: FieldCommon::new(),
            kind,
        }
    }
}

impl_field!(ScalarField);

/// Field holding a nested object with its own sub-fields.
#[derive(Debug, Clone)]
pub struct ObjectField {
    pub(crate) inner: FieldCommon,
    pub fields: Vec<SchemaField>,
}

impl ObjectField {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self {
            inner: FieldCommon::new(),
            fields,
        }
    }
}

impl_field!(ObjectField);

/// Field referencing an uploaded asset (image or file), optionally with
/// editorial sub-fields such as alt text.
#[derive(Debug, Clone)]
pub struct AssetField {
    pub(crate) inner: FieldCommon,
    pub kind: AssetKind,
    pub fields: Vec<SchemaField>,
}

impl AssetField {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            inner: FieldCommon::new(),
            kind,
            fields: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<SchemaField>) -> Self {
        self.fields = fields;
        self
    }
}

impl_field!(AssetField);

/// Field holding an ordered list of homogeneous elements.
///
/// The element definition is anonymous; its rules run per element, and any
/// nested sub-fields are validated with indexed paths (`items[2].text`).
#[derive(Debug, Clone)]
pub struct ArrayField {
    pub(crate) inner: FieldCommon,
    pub element: Box<FieldVariant>,
}

impl ArrayField {
    pub fn new(element: FieldVariant) -> Self {
        Self {
            inner: FieldCommon::new(),
            element: Box::new(element),
        }
    }
}

impl_field!(ArrayField);

/// Enumeration over all field variants.
#[derive(Debug, Clone)]
pub enum FieldVariant {
    /// Single scalar value
    Scalar(ScalarField),
    /// Nested object with sub-fields
    Object(ObjectField),
    /// Asset reference (image or file)
    Asset(AssetField),
    /// Ordered list of elements
    Array(ArrayField),
}

impl FieldVariant {
    /// Nested sub-fields for object and asset variants.
    pub fn sub_fields(&self) -> Option<&[SchemaField]> {
        match self {
            Self::Object(f) => Some(&f.fields),
            Self::Asset(f) if !f.fields.is_empty() => Some(&f.fields),
            _ => None,
        }
    }
}

impl Field for FieldVariant {
    fn title(&self) -> Option<&str> {
        match self {
            Self::Scalar(f) => f.title(),
            Self::Object(f) => f.title(),
            Self::Asset(f) => f.title(),
            Self::Array(f) => f.title(),
        }
    }

    fn set_title(&mut self, title: String) {
        match self {
            Self::Scalar(f) => f.set_title(title),
            Self::Object(f) => f.set_title(title),
            Self::Asset(f) => f.set_title(title),
            Self::Array(f) => f.set_title(title),
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(f) => f.description(),
            Self::Object(f) => f.description(),
            Self::Asset(f) => f.description(),
            Self::Array(f) => f.description(),
        }
    }

    fn set_description(&mut self, description: String) {
        match self {
            Self::Scalar(f) => f.set_description(description),
            Self::Object(f) => f.set_description(description),
            Self::Asset(f) => f.set_description(description),
            Self::Array(f) => f.set_description(description),
        }
    }

    fn rules(&self) -> &RuleSet {
        match self {
            Self::Scalar(f) => f.rules(),
            Self::Object(f) => f.rules(),
            Self::Asset(f) => f.rules(),
            Self::Array(f) => f.rules(),
        }
    }

    fn set_rules(&mut self, rules: RuleSet) {
        match self {
            Self::Scalar(f) => f.set_rules(rules),
            Self::Object(f) => f.set_rules(rules),
            Self::Asset(f) => f.set_rules(rules),
            Self::Array(f) => f.set_rules(rules),
        }
    }

    fn hidden(&self) -> Option<&Condition> {
        match self {
            Self::Scalar(f) => f.hidden(),
            Self::Object(f) => f.hidden(),
            Self::Asset(f) => f.hidden(),
            Self::Array(f) => f.hidden(),
        }
    }

    fn set_hidden(&mut self, condition: Condition) {
        match self {
            Self::Scalar(f) => f.set_hidden(condition),
            Self::Object(f) => f.set_hidden(condition),
            Self::Asset(f) => f.set_hidden(condition),
            Self::Array(f) => f.set_hidden(condition),
        }
    }

    fn initial_value(&self) -> Option<&Value> {
        match self {
            Self::Scalar(f) => f.initial_value(),
            Self::Object(f) => f.initial_value(),
            Self::Asset(f) => f.initial_value(),
            Self::Array(f) => f.initial_value(),
        }
    }

    fn set_initial_value(&mut self, value: Value) {
        match self {
            Self::Scalar(f) => f.set_initial_value(value),
            Self::Object(f) => f.set_initial_value(value),
            Self::Asset(f) => f.set_initial_value(value),
            Self::Array(f) => f.set_initial_value(value),
        }
    }
}
