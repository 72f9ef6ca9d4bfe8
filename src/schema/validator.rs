//! Document validation against a schema.
//!
//! The validator walks fields in declaration order, recursing depth-first
//! through nested objects, assets and array elements. Per field it first
//! evaluates the visibility predicate (a hidden field is skipped entirely,
//! rules and all), then runs the attached rules in attachment order,
//! stopping at the first failure for that field while continuing with its
//! siblings. Failures accumulate and are returned as data, never thrown, so
//! an editing surface can show every problem in one pass.

use chrono::DateTime;
use log::debug;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::core::SchemaRegistry;
use super::types::field::{Field, FieldVariant, ScalarKind, SchemaField};
use super::types::rules::{RuleContext, RuleKind, RuleResult, ValidationRule};
use super::types::{Schema, SchemaError};
use super::utils::{index_path, join_path};
use crate::document::Document;

/// One validation failure: the dotted path to the offending field and a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub path: String,
    pub message: String,
}

/// Validates a document's data against a schema.
///
/// Pure function of its inputs; an empty result means the document is
/// valid. Calling it twice on unchanged inputs yields the same list.
pub fn validate_document(schema: &Schema, data: &Value) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    validate_fields(schema.fields(), data, data, "", &mut failures);
    debug!(
        "Validated document against '{}': {} failure(s)",
        schema.name,
        failures.len()
    );
    failures
}

/// Registry-bound validator, for callers that address schemas by name.
pub struct DocumentValidator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> DocumentValidator<'a> {
    /// Create a new validator operating on the provided registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validates a document without touching its state. Fails only when the
    /// document's schema is unknown.
    pub fn validate(&self, document: &Document) -> Result<Vec<ValidationFailure>, SchemaError> {
        let schema = self.registry.get(document.schema_name())?;
        Ok(validate_document(&schema, document.data()))
    }

    /// Validates a document and moves its state: zero failures promotes a
    /// draft to Valid, any failure returns it to Draft.
    pub fn check(&self, document: &mut Document) -> Result<Vec<ValidationFailure>, SchemaError> {
        let failures = self.validate(document)?;
        document.apply_validation(failures.is_empty());
        Ok(failures)
    }
}

fn validate_fields(
    fields: &[SchemaField],
    parent: &Value,
    document: &Value,
    prefix: &str,
    failures: &mut Vec<ValidationFailure>,
) {
    for field in fields {
        let path = join_path(prefix, &field.name);
        let value = parent.get(&field.name);
        validate_variant(&field.variant, value, parent, document, &path, failures);
    }
}

fn validate_variant(
    variant: &FieldVariant,
    value: Option<&Value>,
    parent: &Value,
    document: &Value,
    path: &str,
    failures: &mut Vec<ValidationFailure>,
) {
    let ctx = RuleContext::new(document, Some(parent));

    // Hidden fields are skipped entirely: their rules do not run, even when
    // they hold a stale value from before they were hidden.
    if let Some(condition) = variant.hidden() {
        if condition.evaluate(&ctx) {
            return;
        }
    }

    let mut failed = false;
    for rule in variant.rules().iter() {
        if let Some(message) = apply_rule(rule, value, &ctx) {
            failures.push(ValidationFailure {
                path: path.to_string(),
                message,
            });
            failed = true;
            break;
        }
    }

    match variant {
        FieldVariant::Scalar(scalar) => {
            if failed {
                return;
            }
            if let Some(v) = value {
                if !v.is_null() {
                    if let Some(message) = check_scalar_type(scalar.kind, v) {
                        failures.push(ValidationFailure {
                            path: path.to_string(),
                            message,
                        });
                    }
                }
            }
        }
        FieldVariant::Object(object) => match value {
            Some(v @ Value::Object(_)) => {
                validate_fields(&object.fields, v, document, path, failures);
            }
            Some(v) if !v.is_null() && !failed => failures.push(ValidationFailure {
                path: path.to_string(),
                message: "Expected an object".to_string(),
            }),
            _ => {}
        },
        FieldVariant::Asset(asset) => match value {
            Some(v @ Value::Object(_)) => {
                if !asset.fields.is_empty() {
                    validate_fields(&asset.fields, v, document, path, failures);
                }
            }
            Some(v) if !v.is_null() && !failed => failures.push(ValidationFailure {
                path: path.to_string(),
                message: "Expected an asset object".to_string(),
            }),
            _ => {}
        },
        FieldVariant::Array(array) => match value {
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = index_path(path, index);
                    validate_variant(
                        &array.element,
                        Some(item),
                        parent,
                        document,
                        &item_path,
                        failures,
                    );
                }
            }
            Some(v) if !v.is_null() && !failed => failures.push(ValidationFailure {
                path: path.to_string(),
                message: "Expected an array".to_string(),
            }),
            _ => {}
        },
    }
}

/// Applies one rule; returns the failure message when it does not pass. An
/// author-supplied message override always wins over the generated default.
fn apply_rule(
    rule: &ValidationRule,
    value: Option<&Value>,
    ctx: &RuleContext<'_>,
) -> Option<String> {
    let generated = match rule.kind() {
        RuleKind::Required => check_required(value),
        RuleKind::RequiredWhen(condition) => {
            if condition.evaluate(ctx) {
                check_required(value)
            } else {
                None
            }
        }
        RuleKind::Min(bound) => check_bound(value, *bound, Bound::Min),
        RuleKind::Max(bound) => check_bound(value, *bound, Bound::Max),
        RuleKind::Regex(pattern) => check_regex(value, pattern),
        RuleKind::Uri {
            schemes,
            allow_relative,
        } => check_uri(value, schemes, *allow_relative),
        RuleKind::OneOf(allowed) => check_one_of(value, allowed),
        RuleKind::Custom(custom) => match custom(value, ctx) {
            RuleResult::Pass => None,
            RuleResult::Fail(message) => Some(message),
        },
    };

    generated.map(|message| match rule.message() {
        Some(author_message) => author_message.to_string(),
        None => message,
    })
}

fn check_required(value: Option<&Value>) -> Option<String> {
    let empty = match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    empty.then(|| "Required".to_string())
}

enum Bound {
    Min,
    Max,
}

/// Bounds count characters for strings (not bytes, not sub-elements),
/// elements for arrays, and compare numerically for numbers. Absent values
/// pass; requiredness is a separate rule.
fn check_bound(value: Option<&Value>, bound: f64, kind: Bound) -> Option<String> {
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };

    match value {
        Value::String(s) => {
            let count = s.chars().count() as f64;
            match kind {
                Bound::Min if count < bound => {
                    Some(format!("Must be at least {bound} characters long"))
                }
                Bound::Max if count > bound => {
                    Some(format!("Must be at most {bound} characters long"))
                }
                _ => None,
            }
        }
        Value::Array(items) => {
            let count = items.len() as f64;
            match kind {
                Bound::Min if count < bound => {
                    Some(format!("Must have at least {bound} entries"))
                }
                Bound::Max if count > bound => Some(format!("Must have at most {bound} entries")),
                _ => None,
            }
        }
        Value::Number(n) => {
            let n = n.as_f64().unwrap_or_default();
            match kind {
                Bound::Min if n < bound => {
                    Some(format!("Must be greater than or equal to {bound}"))
                }
                Bound::Max if n > bound => {
                    Some(format!("Must be less than or equal to {bound}"))
                }
                _ => None,
            }
        }
        _ => Some("Cannot apply a size bound to this value".to_string()),
    }
}

fn check_regex(value: Option<&Value>, pattern: &Regex) -> Option<String> {
    let s = match value {
        Some(Value::String(s)) => s,
        Some(v) if !v.is_null() => {
            return Some("Pattern rules apply to string values".to_string())
        }
        _ => return None,
    };
    if pattern.is_match(s) {
        None
    } else {
        Some("Does not match the required pattern".to_string())
    }
}

fn check_uri(value: Option<&Value>, schemes: &[String], allow_relative: bool) -> Option<String> {
    let s = match value {
        Some(Value::String(s)) => s,
        Some(v) if !v.is_null() => return Some("Expected a URL string".to_string()),
        _ => return None,
    };
    if s.is_empty() {
        return None;
    }
    if s.chars().any(char::is_whitespace) {
        return Some("URL cannot contain whitespace".to_string());
    }
    if allow_relative && (s.starts_with('/') || s.starts_with('#')) {
        return None;
    }

    match s.split_once(':') {
        Some((scheme, rest)) if is_scheme_name(scheme) && !rest.is_empty() => {
            if schemes.iter().any(|allowed| allowed.eq_ignore_ascii_case(scheme)) {
                None
            } else {
                Some(format!(
                    "URL scheme must be one of: {}",
                    schemes.join(", ")
                ))
            }
        }
        _ => Some("Not a valid URL".to_string()),
    }
}

fn is_scheme_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn check_one_of(value: Option<&Value>, allowed: &[Value]) -> Option<String> {
    let v = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    if allowed.contains(v) {
        None
    } else {
        let list = allowed
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Value must be one of: {list}"))
    }
}

fn check_scalar_type(kind: ScalarKind, value: &Value) -> Option<String> {
    match kind {
        ScalarKind::String | ScalarKind::Text => {
            (!value.is_string()).then(|| "Expected a string".to_string())
        }
        ScalarKind::Boolean => (!value.is_boolean()).then(|| "Expected a boolean".to_string()),
        ScalarKind::Number => (!value.is_number()).then(|| "Expected a number".to_string()),
        ScalarKind::Datetime => match value.as_str() {
            Some(s) if DateTime::parse_from_rfc3339(s).is_ok() => None,
            _ => Some("Expected an RFC 3339 datetime string".to_string()),
        },
        ScalarKind::Url => (!value.is_string()).then(|| "Expected a URL string".to_string()),
        ScalarKind::Slug => {
            let current = match value {
                Value::String(s) => Some(s.as_str()),
                // The editing surface stores slugs as {"current": "..."}.
                Value::Object(map) => map.get("current").and_then(Value::as_str),
                _ => None,
            };
            match current {
                Some(s) if is_valid_slug(s) => None,
                _ => Some(
                    "Expected a slug (letters, digits, dashes and underscores)".to_string(),
                ),
            }
        }
    }
}

fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}
