//! contentfold: a headless content schema engine.
//!
//! The engine has three cooperating parts:
//! - a [`schema::SchemaRegistry`] holding every document type the system
//!   understands, populated once at boot;
//! - a [`schema::DocumentValidator`] that walks a document against its
//!   schema and returns every failure as data;
//! - a [`schema::PreviewProjector`] that derives the short display summary
//!   (title, subtitle, media) list views show for a document.
//!
//! Around the core sit the [`document`] lifecycle (Draft → Valid →
//! Published), a JSON schema-definition loader for boot-time configuration,
//! and the [`content`] module with the built-in marketing-site schemas.
//!
//! ```
//! use contentfold::content::register_builtin_schemas;
//! use contentfold::document::Document;
//! use contentfold::schema::{DocumentValidator, SchemaRegistry};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new();
//! register_builtin_schemas(&registry).unwrap();
//!
//! let schema = registry.get("freeIntroClass").unwrap();
//! let mut doc = Document::new(&schema);
//! doc.set("classDate", json!("2026-06-01T17:30:00Z")).unwrap();
//!
//! let validator = DocumentValidator::new(&registry);
//! let failures = validator.check(&mut doc).unwrap();
//! assert!(failures.is_empty());
//! doc.publish().unwrap();
//! ```

pub mod content;
pub mod document;
pub mod schema;

pub use document::{Document, DocumentState, DocumentStore};
pub use schema::{
    load_schemas_from_dir, validate_document, Condition, DocumentValidator, PreviewProjector,
    PreviewResult, PreviewSpec, RuleContext, RuleResult, RuleSet, Schema, SchemaError, SchemaField,
    SchemaKind, SchemaRegistry, ValidationFailure,
};
