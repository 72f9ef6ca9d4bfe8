//! Read-only exposure of published documents.
//!
//! The store is the surface an external content-query collaborator reads
//! from. It only accepts Published documents and hands out clones, so
//! consumers can never mutate stored content.

use std::collections::HashMap;
use std::sync::Mutex;

use log::info;
use uuid::Uuid;

use super::{Document, DocumentState};
use crate::schema::types::SchemaError;

/// In-memory store of published documents, keyed by schema name and
/// document id.
pub struct DocumentStore {
    documents: Mutex<HashMap<String, HashMap<Uuid, Document>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
        }
    }

    /// Stores a published document. Anything else is rejected.
    pub fn insert(&self, document: Document) -> Result<(), SchemaError> {
        if document.state() != DocumentState::Published {
            return Err(SchemaError::NotPublishable(format!(
                "document {} is {:?}; only published documents are stored",
                document.id(),
                document.state()
            )));
        }

        let mut documents = self
            .documents
            .lock()
            .map_err(|_| SchemaError::InvalidData("Failed to acquire store lock".to_string()))?;

        info!(
            "Stored published document {} ({})",
            document.id(),
            document.schema_name()
        );
        documents
            .entry(document.schema_name().to_string())
            .or_default()
            .insert(document.id(), document);
        Ok(())
    }

    /// Retrieves a clone of a stored document.
    pub fn get(&self, schema_name: &str, id: &Uuid) -> Result<Option<Document>, SchemaError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| SchemaError::InvalidData("Failed to acquire store lock".to_string()))?;
        Ok(documents
            .get(schema_name)
            .and_then(|by_id| by_id.get(id))
            .cloned())
    }

    /// Lists clones of all stored documents for one schema.
    pub fn list(&self, schema_name: &str) -> Result<Vec<Document>, SchemaError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| SchemaError::InvalidData("Failed to acquire store lock".to_string()))?;
        Ok(documents
            .get(schema_name)
            .map(|by_id| by_id.values().cloned().collect())
            .unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.documents
            .lock()
            .map(|docs| docs.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
