//! JSON mirror of the schema definition types.
//!
//! A schema set can be enumerated in `.json` configuration files (one
//! document type per file) and loaded at boot. The mirror covers the
//! declarative subset of the engine: typed fields, rules, equality-based
//! conditions, initial values and preview selects. Closure-based custom
//! rules and prepare functions are only constructible through the Rust API.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::preview::PreviewSpec;
use crate::schema::types::field::{
    ArrayField, AssetField, AssetKind, Field, FieldVariant, ObjectField, ScalarField, ScalarKind,
    SchemaField,
};
use crate::schema::types::rules::{Condition, RuleSet};
use crate::schema::types::schema::SchemaKind;
use crate::schema::types::{Schema, SchemaError};

/// Represents a complete JSON schema definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchemaDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub kind: SchemaKind,
    pub fields: Vec<JsonFieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<JsonPreviewSpec>,
}

/// Represents a field in the JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFieldDefinition {
    /// Field name; array element definitions leave it empty.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: JsonFieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<JsonRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<JsonCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
    /// Sub-fields for object, image and file fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<JsonFieldDefinition>>,
    /// Element definition for array fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of: Option<Box<JsonFieldDefinition>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFieldType {
    String,
    Text,
    Boolean,
    Number,
    Datetime,
    Url,
    Slug,
    Image,
    File,
    Object,
    Array,
}

/// JSON representation of one validation rule.
///
/// Only the attributes a rule kind actually uses are kept. Unknown
/// attributes in the incoming JSON cause a deserialization error so that
/// stale rule options do not silently pass through the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonRule {
    pub rule: JsonRuleKind,
    /// Bound for `min` / `max`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Pattern source for `pattern`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Allowed scheme set for `uri`; defaults to http/https.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
    /// Whether `uri` also accepts `/path` and `#anchor` forms.
    #[serde(default)]
    pub allow_relative: bool,
    /// Allowed values for `one_of`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
    /// Condition for `required_when`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<JsonCondition>,
    /// Author-supplied message override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonRuleKind {
    Required,
    RequiredWhen,
    Min,
    Max,
    Pattern,
    Uri,
    OneOf,
}

/// JSON representation of a visibility / requiredness condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum JsonCondition {
    FieldEquals { path: String, value: Value },
    FieldNotEquals { path: String, value: Value },
}

impl From<JsonCondition> for Condition {
    fn from(json: JsonCondition) -> Self {
        match json {
            JsonCondition::FieldEquals { path, value } => Condition::FieldEquals { path, value },
            JsonCondition::FieldNotEquals { path, value } => {
                Condition::FieldNotEquals { path, value }
            }
        }
    }
}

/// JSON representation of the preview projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPreviewSpec {
    pub select: BTreeMap<String, String>,
}

impl From<JsonPreviewSpec> for PreviewSpec {
    fn from(json: JsonPreviewSpec) -> Self {
        let mut spec = PreviewSpec::new();
        for (slot, path) in json.select {
            spec = spec.select(slot, path);
        }
        spec
    }
}

fn default_schemes() -> Vec<String> {
    vec!["http".to_string(), "https".to_string()]
}

impl JsonSchemaDefinition {
    /// Validates the definition's shape before conversion.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidSchema` for an empty schema name and
    /// `SchemaError::InvalidField` for empty field names, missing array
    /// element definitions, or patterns that do not compile.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "Schema name cannot be empty".to_string(),
            ));
        }
        for field in &self.fields {
            validate_json_field(field, &self.name, false)?;
        }
        Ok(())
    }

    /// Converts the definition into an engine [`Schema`], validating it
    /// first. Duplicate field names per nesting level are rejected by the
    /// schema constructor.
    pub fn into_schema(self) -> Result<Schema, SchemaError> {
        self.validate()?;

        let mut fields = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            fields.push(convert_field(field)?);
        }

        let mut schema = Schema::new(self.name)
            .with_kind(self.kind)
            .with_fields(fields)?;
        if let Some(title) = self.title {
            schema = schema.with_title(title);
        }
        if let Some(preview) = self.preview {
            schema = schema.with_preview(preview.into());
        }
        Ok(schema)
    }
}

fn validate_json_field(
    field: &JsonFieldDefinition,
    scope: &str,
    is_element: bool,
) -> Result<(), SchemaError> {
    if field.name.is_empty() && !is_element {
        return Err(SchemaError::InvalidField(format!(
            "Field name cannot be empty in '{scope}'"
        )));
    }

    for rule in &field.rules {
        if rule.rule == JsonRuleKind::Pattern {
            if let Some(pattern) = &rule.pattern {
                Regex::new(pattern).map_err(|e| {
                    SchemaError::InvalidField(format!(
                        "Invalid pattern on field '{}' in '{scope}': {e}",
                        field.name
                    ))
                })?;
            }
        }
    }

    if field.field_type == JsonFieldType::Array && field.of.is_none() {
        return Err(SchemaError::InvalidField(format!(
            "Array field '{}' in '{scope}' has no element definition",
            field.name
        )));
    }

    let child_scope = if field.name.is_empty() {
        scope.to_string()
    } else {
        format!("{scope}.{}", field.name)
    };
    if let Some(children) = &field.fields {
        for child in children {
            validate_json_field(child, &child_scope, false)?;
        }
    }
    if let Some(element) = &field.of {
        validate_json_field(element, &child_scope, true)?;
    }
    Ok(())
}

fn convert_field(json: JsonFieldDefinition) -> Result<SchemaField, SchemaError> {
    let name = json.name.clone();
    let variant = convert_variant(json)?;
    Ok(SchemaField::new(name, variant))
}

fn convert_variant(json: JsonFieldDefinition) -> Result<FieldVariant, SchemaError> {
    let JsonFieldDefinition {
        name,
        field_type,
        title,
        description,
        rules,
        hidden,
        initial_value,
        fields,
        of,
    } = json;

    let mut rule_set = RuleSet::new();
    for rule in &rules {
        rule_set = apply_json_rule(rule_set, rule, &name)?;
    }

    let mut variant = match field_type {
        JsonFieldType::String => FieldVariant::Scalar(ScalarField::new(ScalarKind::String)),
        JsonFieldType::Text => FieldVariant::Scalar(ScalarField::new(ScalarKind::Text)),
        JsonFieldType::Boolean => FieldVariant::Scalar(ScalarField::new(ScalarKind::Boolean)),
        JsonFieldType::Number => FieldVariant::Scalar(ScalarField::new(ScalarKind::Number)),
        JsonFieldType::Datetime => FieldVariant::Scalar(ScalarField::new(ScalarKind::Datetime)),
        JsonFieldType::Url => FieldVariant::Scalar(ScalarField::new(ScalarKind::Url)),
        JsonFieldType::Slug => FieldVariant::Scalar(ScalarField::new(ScalarKind::Slug)),
        JsonFieldType::Image | JsonFieldType::File => {
            let kind = if field_type == JsonFieldType::Image {
                AssetKind::Image
            } else {
                AssetKind::File
            };
            let sub_fields = convert_fields(fields.unwrap_or_default())?;
            FieldVariant::Asset(AssetField::new(kind).with_fields(sub_fields))
        }
        JsonFieldType::Object => {
            let sub_fields = convert_fields(fields.unwrap_or_default())?;
            FieldVariant::Object(ObjectField::new(sub_fields))
        }
        JsonFieldType::Array => {
            let element = of.ok_or_else(|| {
                SchemaError::InvalidField(format!(
                    "Array field '{name}' has no element definition"
                ))
            })?;
            let element = convert_variant(*element)?;
            FieldVariant::Array(ArrayField::new(element))
        }
    };

    if let Some(title) = title {
        variant.set_title(title);
    }
    if let Some(description) = description {
        variant.set_description(description);
    }
    if !rule_set.is_empty() {
        variant.set_rules(rule_set);
    }
    if let Some(condition) = hidden {
        variant.set_hidden(condition.into());
    }
    if let Some(value) = initial_value {
        variant.set_initial_value(value);
    }
    Ok(variant)
}

fn convert_fields(fields: Vec<JsonFieldDefinition>) -> Result<Vec<SchemaField>, SchemaError> {
    fields.into_iter().map(convert_field).collect()
}

fn apply_json_rule(rules: RuleSet, rule: &JsonRule, field: &str) -> Result<RuleSet, SchemaError> {
    let rules = match rule.rule {
        JsonRuleKind::Required => rules.required(),
        JsonRuleKind::RequiredWhen => {
            let condition = rule
                .condition
                .clone()
                .ok_or_else(|| missing_attribute(field, "required_when", "condition"))?;
            rules.required_when(condition.into())
        }
        JsonRuleKind::Min => {
            rules.min(rule.value.ok_or_else(|| missing_attribute(field, "min", "value"))?)
        }
        JsonRuleKind::Max => {
            rules.max(rule.value.ok_or_else(|| missing_attribute(field, "max", "value"))?)
        }
        JsonRuleKind::Pattern => {
            let pattern = rule
                .pattern
                .as_deref()
                .ok_or_else(|| missing_attribute(field, "pattern", "pattern"))?;
            let compiled = Regex::new(pattern).map_err(|e| {
                SchemaError::InvalidField(format!(
                    "Invalid pattern on field '{field}': {e}"
                ))
            })?;
            rules.matches(&compiled)
        }
        JsonRuleKind::Uri => {
            let schemes = rule.schemes.clone().unwrap_or_else(default_schemes);
            let schemes: Vec<&str> = schemes.iter().map(String::as_str).collect();
            rules.uri(&schemes, rule.allow_relative)
        }
        JsonRuleKind::OneOf => rules.one_of(
            rule.values
                .clone()
                .ok_or_else(|| missing_attribute(field, "one_of", "values"))?,
        ),
    };
    Ok(match &rule.message {
        Some(message) => rules.error(message.clone()),
        None => rules,
    })
}

fn missing_attribute(field: &str, rule: &str, attribute: &str) -> SchemaError {
    SchemaError::InvalidField(format!(
        "Rule '{rule}' on field '{field}' is missing '{attribute}'"
    ))
}
