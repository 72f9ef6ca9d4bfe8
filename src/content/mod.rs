//! Built-in content schemas for the marketing website.
//!
//! Each schema mirrors one editorial document type: the informational
//! banner, the free-introductory-class modal, the hero section and the
//! landing-page about section. All four are registered in one boot step.

pub mod hero_section;
pub mod info_banner;
pub mod intro_modal;
pub mod landing_about;

pub use hero_section::hero_section;
pub use info_banner::info_banner;
pub use intro_modal::free_intro_class;
pub use landing_about::landing_page_about;

use crate::schema::core::SchemaRegistry;
use crate::schema::types::{Schema, SchemaError};

/// Builds the full built-in schema set.
pub fn builtin_schemas() -> Result<Vec<Schema>, SchemaError> {
    Ok(vec![
        info_banner()?,
        free_intro_class()?,
        hero_section()?,
        landing_page_about()?,
    ])
}

/// Registers every built-in schema into the given registry.
pub fn register_builtin_schemas(registry: &SchemaRegistry) -> Result<(), SchemaError> {
    for schema in builtin_schemas()? {
        registry.register(schema)?;
    }
    Ok(())
}
