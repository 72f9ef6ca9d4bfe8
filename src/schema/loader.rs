//! Boot-time schema loading.
//!
//! Reads every `*.json` file in a directory, one schema definition per
//! file, converts each into an engine schema and registers it. A file
//! that fails to parse or validate is reported by name in the load report;
//! it does not abort the remaining loads.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use super::core::SchemaRegistry;
use super::types::{JsonSchemaDefinition, SchemaError};

/// Report of a schema-set load operation.
#[derive(Debug, Serialize)]
pub struct SchemaLoadReport {
    /// Names of the schemas that were registered.
    pub loaded: Vec<String>,
    /// Files that failed, with the error message.
    pub failed: Vec<(String, String)>,
    /// Timestamp of the load operation.
    pub loaded_at: DateTime<Utc>,
}

/// Loads every schema definition in `dir` into the registry.
///
/// # Errors
/// Fails only when the directory itself cannot be read; per-file problems
/// land in the report instead.
pub fn load_schemas_from_dir(
    dir: &Path,
    registry: &SchemaRegistry,
) -> Result<SchemaLoadReport, SchemaError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        SchemaError::InvalidData(format!(
            "Failed to read schema directory {}: {e}",
            dir.display()
        ))
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut report = SchemaLoadReport {
        loaded: Vec::new(),
        failed: Vec::new(),
        loaded_at: Utc::now(),
    };

    for path in files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match load_schema_file(&path, registry) {
            Ok(name) => {
                info!("Loaded schema '{name}' from {file_name}");
                report.loaded.push(name);
            }
            Err(e) => {
                warn!("Skipping schema file {file_name}: {e}");
                report.failed.push((file_name, e.to_string()));
            }
        }
    }

    info!(
        "Schema load complete: {} loaded, {} failed",
        report.loaded.len(),
        report.failed.len()
    );
    Ok(report)
}

fn load_schema_file(path: &Path, registry: &SchemaRegistry) -> Result<String, SchemaError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SchemaError::InvalidData(format!("Failed to read file: {e}")))?;
    let definition: JsonSchemaDefinition = serde_json::from_str(&contents)
        .map_err(|e| SchemaError::InvalidData(format!("Failed to parse definition: {e}")))?;
    let schema = definition.into_schema()?;
    let name = schema.name.clone();
    registry.register(schema)?;
    Ok(name)
}
