pub mod errors;
pub mod field;
pub mod json_schema;
pub mod rules;
pub mod schema;

pub use errors::SchemaError;
pub use field::{
    ArrayField, AssetField, AssetKind, Field, FieldVariant, ObjectField, ScalarField, ScalarKind,
    SchemaField,
};
pub use json_schema::{
    JsonCondition, JsonFieldDefinition, JsonFieldType, JsonPreviewSpec, JsonRule, JsonRuleKind,
    JsonSchemaDefinition,
};
pub use rules::{Condition, RuleContext, RuleKind, RuleResult, RuleSet, ValidationRule};
pub use schema::{Schema, SchemaKind};
