use serde_json::Value;

use crate::schema::types::rules::{Condition, RuleSet};

/// Common interface for all schema fields.
///
/// The `Field` trait exposes accessors for the attributes shared by every
/// field variant: editorial title and description, the attached rule set,
/// the visibility predicate and the initial value.
pub trait Field {
    /// Returns the editorial title for this field, if one was set.
    fn title(&self) -> Option<&str>;

    /// Sets the editorial title for this field.
    fn set_title(&mut self, title: String);

    /// Returns the editorial description for this field.
    fn description(&self) -> Option<&str>;

    /// Sets the editorial description for this field.
    fn set_description(&mut self, description: String);

    /// Returns the validation rules attached to this field.
    fn rules(&self) -> &RuleSet;

    /// Replaces the validation rules for this field.
    fn set_rules(&mut self, rules: RuleSet);

    /// Returns the visibility predicate, if the field is conditionally hidden.
    fn hidden(&self) -> Option<&Condition>;

    /// Sets the visibility predicate for this field.
    fn set_hidden(&mut self, condition: Condition);

    /// Returns the initial value seeded into new documents.
    fn initial_value(&self) -> Option<&Value>;

    /// Sets the initial value for this field.
    fn set_initial_value(&mut self, value: Value);
}

/// Attributes shared by all field variants.
#[derive(Debug, Clone, Default)]
pub struct FieldCommon {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rules: RuleSet,
    pub hidden: Option<Condition>,
    pub initial_value: Option<Value>,
}

impl FieldCommon {
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! impl_field {
    ($t:ty) => {
        impl Field for $t {
            fn title(&self) -> Option<&str> {
                self.inner.title.as_deref()
            }

            fn set_title(&mut self, title: String) {
                self.inner.title = Some(title);
            }

            fn description(&self) -> Option<&str> {
                self.inner.description.as_deref()
            }

            fn set_description(&mut self, description: String) {
                self.inner.description = Some(description);
            }

            fn rules(&self) -> &RuleSet {
                &self.inner.rules
            }

            fn set_rules(&mut self, rules: RuleSet) {
                self.inner.rules = rules;
            }

            fn hidden(&self) -> Option<&Condition> {
                self.inner.hidden.as_ref()
            }

            fn set_hidden(&mut self, condition: Condition) {
                self.inner.hidden = Some(condition);
            }

            fn initial_value(&self) -> Option<&Value> {
                self.inner.initial_value.as_ref()
            }

            fn set_initial_value(&mut self, value: Value) {
                self.inner.initial_value = Some(value);
            }
        }
    };
}

pub(crate) use impl_field;
