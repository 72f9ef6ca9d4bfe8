//! Validation rules and visibility conditions.
//!
//! A field carries a [`RuleSet`] built with a fluent chain, mirroring how
//! editors declare constraints:
//!
//! ```
//! use contentfold::schema::types::RuleSet;
//!
//! let rules = RuleSet::new().required().min(0.0).max(60.0);
//! ```
//!
//! Custom rules and conditions receive an explicit [`RuleContext`] exposing
//! the document root and the parent object, never an ambient document
//! reference, so cross-field rules stay independently testable.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::schema::utils::resolve_path;

/// Outcome of a custom rule.
pub enum RuleResult {
    Pass,
    Fail(String),
}

impl RuleResult {
    /// Shorthand for a failing result with the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }
}

/// Read-only view handed to custom rules and visibility conditions.
pub struct RuleContext<'a> {
    document: &'a Value,
    parent: Option<&'a Value>,
}

impl<'a> RuleContext<'a> {
    pub fn new(document: &'a Value, parent: Option<&'a Value>) -> Self {
        Self { document, parent }
    }

    /// The full document under validation.
    pub fn document(&self) -> &Value {
        self.document
    }

    /// The object holding the field under validation, when one exists.
    pub fn parent(&self) -> Option<&Value> {
        self.parent
    }

    /// Resolves a dotted path from the document root.
    pub fn field(&self, path: &str) -> Option<&Value> {
        resolve_path(self.document, path)
    }
}

type ConditionFn = Arc<dyn Fn(&RuleContext<'_>) -> bool + Send + Sync>;

/// Predicate over sibling document state, used for visibility and for
/// conditional requiredness.
#[derive(Clone)]
pub enum Condition {
    /// True when the value at `path` equals `value`. A missing field
    /// compares as JSON null.
    FieldEquals { path: String, value: Value },
    /// True when the value at `path` differs from `value`.
    FieldNotEquals { path: String, value: Value },
    /// Arbitrary predicate over the rule context.
    Custom(ConditionFn),
}

impl Condition {
    pub fn field_equals(path: impl Into<String>, value: Value) -> Self {
        Self::FieldEquals {
            path: path.into(),
            value,
        }
    }

    pub fn field_not_equals(path: impl Into<String>, value: Value) -> Self {
        Self::FieldNotEquals {
            path: path.into(),
            value,
        }
    }

    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Evaluates the condition against the given context.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            Self::FieldEquals { path, value } => {
                ctx.field(path).unwrap_or(&Value::Null) == value
            }
            Self::FieldNotEquals { path, value } => {
                ctx.field(path).unwrap_or(&Value::Null) != value
            }
            Self::Custom(predicate) => predicate(ctx),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldEquals { path, value } => {
                write!(f, "FieldEquals({path} == {value})")
            }
            Self::FieldNotEquals { path, value } => {
                write!(f, "FieldNotEquals({path} != {value})")
            }
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

type CustomRuleFn = Arc<dyn Fn(Option<&Value>, &RuleContext<'_>) -> RuleResult + Send + Sync>;

/// The constraint kinds a rule can carry.
#[derive(Clone)]
pub enum RuleKind {
    /// Value must be present and non-empty.
    Required,
    /// Value must be present and non-empty while the condition holds.
    RequiredWhen(Condition),
    /// Lower bound: characters for strings, element count for arrays,
    /// numeric comparison for numbers.
    Min(f64),
    /// Upper bound, same unit rules as `Min`.
    Max(f64),
    /// Anchored pattern match over the entire candidate string.
    Regex(Regex),
    /// URL with an allowed scheme set; `allow_relative` additionally accepts
    /// `/path` and `#anchor` forms.
    Uri {
        schemes: Vec<String>,
        allow_relative: bool,
    },
    /// Value must equal one of the listed values.
    OneOf(Vec<Value>),
    /// Author-supplied predicate over the value and its sibling context.
    Custom(CustomRuleFn),
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::RequiredWhen(cond) => write!(f, "RequiredWhen({cond:?})"),
            Self::Min(n) => write!(f, "Min({n})"),
            Self::Max(n) => write!(f, "Max({n})"),
            Self::Regex(re) => write!(f, "Regex({})", re.as_str()),
            Self::Uri {
                schemes,
                allow_relative,
            } => write!(f, "Uri({schemes:?}, relative: {allow_relative})"),
            Self::OneOf(values) => write!(f, "OneOf({values:?})"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// One constraint plus an optional author-supplied message override.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub(crate) kind: RuleKind,
    pub(crate) message: Option<String>,
}

impl ValidationRule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Ordered set of rules attached to one field. All rules must pass; the
/// validator stops at the first failure per field.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<ValidationRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self) -> Self {
        self.push(RuleKind::Required)
    }

    pub fn required_when(self, condition: Condition) -> Self {
        self.push(RuleKind::RequiredWhen(condition))
    }

    pub fn min(self, bound: f64) -> Self {
        self.push(RuleKind::Min(bound))
    }

    pub fn max(self, bound: f64) -> Self {
        self.push(RuleKind::Max(bound))
    }

    /// Attaches an anchored pattern match. The pattern is wrapped in
    /// `^(?:…)$` so a partial match never passes.
    pub fn matches(self, pattern: &Regex) -> Self {
        let anchored = Regex::new(&format!("^(?:{})$", pattern.as_str()))
            .unwrap_or_else(|_| pattern.clone());
        self.push(RuleKind::Regex(anchored))
    }

    pub fn uri(self, schemes: &[&str], allow_relative: bool) -> Self {
        self.push(RuleKind::Uri {
            schemes: schemes.iter().map(|s| s.to_lowercase()).collect(),
            allow_relative,
        })
    }

    pub fn one_of(self, values: Vec<Value>) -> Self {
        self.push(RuleKind::OneOf(values))
    }

    pub fn custom<F>(self, rule: F) -> Self
    where
        F: Fn(Option<&Value>, &RuleContext<'_>) -> RuleResult + Send + Sync + 'static,
    {
        self.push(RuleKind::Custom(Arc::new(rule)))
    }

    /// Overrides the generated message of the most recently attached rule.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.message = Some(message.into());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationRule> {
        self.rules.iter()
    }

    fn push(mut self, kind: RuleKind) -> Self {
        self.rules.push(ValidationRule::new(kind));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_equals_treats_missing_as_null() {
        let doc = json!({"heroType": "summerCamp"});
        let ctx = RuleContext::new(&doc, None);

        let eq = Condition::field_equals("heroType", json!("summerCamp"));
        assert!(eq.evaluate(&ctx));

        let missing_eq = Condition::field_equals("missing", json!("x"));
        assert!(!missing_eq.evaluate(&ctx));

        let missing_ne = Condition::field_not_equals("missing", json!("x"));
        assert!(missing_ne.evaluate(&ctx));
    }

    #[test]
    fn custom_condition_sees_the_document() {
        let doc = json!({"a": 1, "b": 2});
        let ctx = RuleContext::new(&doc, None);
        let cond = Condition::custom(|ctx| ctx.field("a") == ctx.field("b"));
        assert!(!cond.evaluate(&ctx));
    }

    #[test]
    fn error_overrides_the_last_rule_only() {
        let rules = RuleSet::new().required().max(5.0).error("Too long");
        let collected: Vec<_> = rules.iter().collect();
        assert_eq!(collected.len(), 2);
        assert!(collected[0].message().is_none());
        assert_eq!(collected[1].message(), Some("Too long"));
    }

    #[test]
    fn matches_anchors_the_pattern() {
        let pattern = Regex::new("[a-z]+").unwrap();
        let rules = RuleSet::new().matches(&pattern);
        let rule = rules.iter().next().unwrap();
        match rule.kind() {
            RuleKind::Regex(re) => assert_eq!(re.as_str(), "^(?:[a-z]+)$"),
            other => panic!("unexpected rule kind: {other:?}"),
        }
    }
}
