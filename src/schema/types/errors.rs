use thiserror::Error;

/// Errors produced by the schema engine.
///
/// Field-level validation failures are not errors: they are returned as data
/// (`Vec<ValidationFailure>`) so an editing surface can render every problem
/// in one pass. This enum covers the failures that abort an operation.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// No schema with the requested name is registered.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A schema with this name is already registered.
    #[error("Duplicate schema name: {0}")]
    DuplicateName(String),

    /// The schema definition itself is malformed.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A field definition is malformed.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Supplied data could not be read or has the wrong shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The document is not in a publishable state.
    #[error("Document not publishable: {0}")]
    NotPublishable(String),
}
