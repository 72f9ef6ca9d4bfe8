//! Shared fixtures for the integration tests.

use contentfold::content::register_builtin_schemas;
use contentfold::{DocumentStore, SchemaRegistry};

/// Editorial environment: a registry booted with the built-in schema set
/// and an empty published-document store.
pub struct EditorialFixture {
    pub registry: SchemaRegistry,
    pub store: DocumentStore,
}

impl EditorialFixture {
    pub fn new() -> Self {
        init_logging();
        let registry = SchemaRegistry::new();
        register_builtin_schemas(&registry).expect("builtin schemas register");
        Self {
            registry,
            store: DocumentStore::new(),
        }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
