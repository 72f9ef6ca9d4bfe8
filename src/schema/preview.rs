//! Preview projection: derives the short display summary (title, subtitle,
//! media) a document shows in editorial list views.
//!
//! Slot paths are dereferenced through the document; a missing intermediate
//! yields an absent slot, never an error. A missing title falls back to the
//! schema's own title so list rows are never blank.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::core::SchemaRegistry;
use super::types::{Schema, SchemaError};
use super::utils::resolve_path;

/// Raw slot values resolved from a document, handed to `prepare`.
#[derive(Debug, Default)]
pub struct PreviewValues {
    values: HashMap<String, Value>,
}

impl PreviewValues {
    /// The resolved value for a slot, if the path dereferenced.
    pub fn get(&self, slot: &str) -> Option<&Value> {
        self.values.get(slot)
    }

    /// The resolved value as a string slice, when it is one.
    pub fn str(&self, slot: &str) -> Option<&str> {
        self.values.get(slot).and_then(Value::as_str)
    }
}

type PrepareFn = Arc<dyn Fn(&PreviewValues) -> PreviewResult + Send + Sync>;

/// Mapping of output slots to dotted field paths, plus an optional pure
/// derivation step.
#[derive(Clone, Default)]
pub struct PreviewSpec {
    selects: Vec<(String, String)>,
    prepare: Option<PrepareFn>,
}

impl PreviewSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an output slot to a dotted field path. The conventional slots
    /// are `title`, `subtitle` and `media`; additional slots are only
    /// visible to `prepare`.
    pub fn select(mut self, slot: impl Into<String>, path: impl Into<String>) -> Self {
        self.selects.push((slot.into(), path.into()));
        self
    }

    /// Sets the derivation step. It receives the resolved raw values and
    /// returns the final display strings; it must not mutate its input
    /// (enforced by the shared reference).
    pub fn prepare<F>(mut self, prepare: F) -> Self
    where
        F: Fn(&PreviewValues) -> PreviewResult + Send + Sync + 'static,
    {
        self.prepare = Some(Arc::new(prepare));
        self
    }
}

impl fmt::Debug for PreviewSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSpec")
            .field("selects", &self.selects)
            .field("prepare", &self.prepare.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Projected display summary for one document. All slots are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewResult {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub media: Option<Value>,
}

/// Projects a document's preview through its schema.
///
/// Pure function of its inputs: resolves the selected slot paths, runs
/// `prepare` when present, and falls back to the schema title when no title
/// was derived.
pub fn project(schema: &Schema, data: &Value) -> PreviewResult {
    let mut result = match &schema.preview {
        None => PreviewResult::default(),
        Some(spec) => {
            let mut values = PreviewValues::default();
            for (slot, path) in &spec.selects {
                if let Some(value) = resolve_path(data, path) {
                    values.values.insert(slot.clone(), value.clone());
                }
            }

            match &spec.prepare {
                Some(prepare) => prepare(&values),
                None => PreviewResult {
                    title: values.str("title").map(str::to_string),
                    subtitle: values.str("subtitle").map(str::to_string),
                    media: values.get("media").cloned(),
                },
            }
        }
    };

    if result.title.is_none() {
        result.title = Some(schema.title.clone());
    }
    result
}

/// Registry-bound projector, for callers that address schemas by name.
pub struct PreviewProjector<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> PreviewProjector<'a> {
    /// Create a new projector operating on the provided registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Projects the preview for a document of the named schema. Fails only
    /// when the schema is unknown.
    pub fn project(&self, schema_name: &str, data: &Value) -> Result<PreviewResult, SchemaError> {
        let schema = self.registry.get(schema_name)?;
        Ok(project(&schema, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::SchemaField;
    use serde_json::json;

    fn hero_preview_schema() -> Schema {
        Schema::new("heroSection")
            .with_title("Hero Section")
            .with_fields(vec![
                SchemaField::object("title", vec![SchemaField::string("first")]),
                SchemaField::image("background"),
            ])
            .unwrap()
            .with_preview(
                PreviewSpec::new()
                    .select("title", "title.first")
                    .select("media", "background"),
            )
    }

    #[test]
    fn projects_selected_slots() {
        let schema = hero_preview_schema();
        let doc = json!({
            "title": {"first": "En Garde"},
            "background": {"url": "/img/hero.jpg"}
        });
        let preview = project(&schema, &doc);
        assert_eq!(preview.title.as_deref(), Some("En Garde"));
        assert_eq!(preview.media, Some(json!({"url": "/img/hero.jpg"})));
        assert_eq!(preview.subtitle, None);
    }

    #[test]
    fn missing_intermediates_resolve_to_absent() {
        let schema = hero_preview_schema();
        let preview = project(&schema, &json!({}));
        // Fallback title, absent media, no panic.
        assert_eq!(preview.title.as_deref(), Some("Hero Section"));
        assert_eq!(preview.media, None);
    }

    #[test]
    fn missing_title_falls_back_to_schema_title() {
        let schema = hero_preview_schema();
        let preview = project(&schema, &json!({"background": {"url": "x"}}));
        assert_eq!(preview.title.as_deref(), Some("Hero Section"));
    }

    #[test]
    fn prepare_receives_resolved_values() {
        let schema = Schema::new("heroSection")
            .with_title("Hero Section")
            .with_preview(
                PreviewSpec::new()
                    .select("title", "title.first")
                    .select("heroType", "heroType")
                    .prepare(|values| {
                        let label = match values.str("heroType") {
                            Some("summerCamp") => "Summer Camp Hero",
                            _ => "Hero",
                        };
                        PreviewResult {
                            title: values
                                .str("title")
                                .map(|t| format!("{label} – {t}")),
                            ..Default::default()
                        }
                    }),
            );

        let doc = json!({"heroType": "summerCamp", "title": {"first": "Camp"}});
        let preview = project(&schema, &doc);
        assert_eq!(preview.title.as_deref(), Some("Summer Camp Hero – Camp"));
    }

    #[test]
    fn schema_without_preview_uses_schema_title() {
        let schema = Schema::new("infoBanner").with_title("Info Banner");
        let preview = project(&schema, &json!({"anything": 1}));
        assert_eq!(preview.title.as_deref(), Some("Info Banner"));
    }
}
