//! The schema engine: registry, validator and preview projector.

pub mod core;
pub mod loader;
pub mod preview;
pub mod types;
pub mod utils;
pub mod validator;

pub use self::core::SchemaRegistry;
pub use loader::{load_schemas_from_dir, SchemaLoadReport};
pub use preview::{project, PreviewProjector, PreviewResult, PreviewSpec, PreviewValues};
pub use types::{
    Condition, Field, FieldVariant, RuleContext, RuleResult, RuleSet, Schema, SchemaError,
    SchemaField, SchemaKind,
};
pub use validator::{validate_document, DocumentValidator, ValidationFailure};
