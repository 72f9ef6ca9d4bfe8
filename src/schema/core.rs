//! The document schema registry.
//!
//! Process-wide set of named schema definitions, populated during a
//! single-threaded boot step and read thereafter. The registry is an
//! explicitly constructed value that callers pass to the validator and
//! projector, so tests can build isolated registries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::info;

use super::types::{Schema, SchemaError};

/// Holds every schema definition the engine understands, keyed by name.
pub struct SchemaRegistry {
    schemas: Mutex<HashMap<String, Arc<Schema>>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a schema. Fails when the name is empty or already taken;
    /// registration order is otherwise irrelevant.
    pub fn register(&self, schema: Schema) -> Result<(), SchemaError> {
        if schema.name.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "Schema name cannot be empty".to_string(),
            ));
        }

        let mut schemas = self
            .schemas
            .lock()
            .map_err(|_| SchemaError::InvalidData("Failed to acquire schema lock".to_string()))?;

        if schemas.contains_key(&schema.name) {
            return Err(SchemaError::DuplicateName(schema.name));
        }

        info!("Registered schema '{}'", schema.name);
        schemas.insert(schema.name.clone(), Arc::new(schema));
        Ok(())
    }

    /// Retrieves a schema by name. Unknown names are fatal to the calling
    /// operation; there is no recovery path other than supplying a valid
    /// name.
    pub fn get(&self, name: &str) -> Result<Arc<Schema>, SchemaError> {
        let schemas = self
            .schemas
            .lock()
            .map_err(|_| SchemaError::InvalidData("Failed to acquire schema lock".to_string()))?;
        schemas
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Checks whether a schema with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas
            .lock()
            .map(|schemas| schemas.contains_key(name))
            .unwrap_or(false)
    }

    /// Lists all registered schema names.
    pub fn schema_names(&self) -> Result<Vec<String>, SchemaError> {
        let schemas = self
            .schemas
            .lock()
            .map_err(|_| SchemaError::InvalidData("Failed to acquire schema lock".to_string()))?;
        Ok(schemas.keys().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.schemas.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
