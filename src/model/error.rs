//! Error types for model construction and serialization.
//!
//! Precondition errors carry fixed literal messages so callers can match on
//! error identity. Verified-query failures carry a machine-checkable reason
//! code (`sql_cannot_be_empty`, `bad_type_for_verified_at`, `invalid_sql: ...`)
//! rather than free text.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for builder operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by builder preconditions and model-level operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A mutating builder call was made while no model is current.
    #[error("No current semantic model is set in the builder")]
    NoCurrentModel,

    /// A table-scoped builder call referenced a table not in the current model.
    #[error("Table not found in the current semantic model")]
    TableNotFound,

    /// A verified query failed constructor-time validation.
    #[error(transparent)]
    VerifiedQuery(#[from] VerifiedQueryError),

    /// A document could not be read, written, or parsed.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Constructor-time validation failures for [`crate::model::VerifiedQuery`].
///
/// The `Display` text of each variant is the reason code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifiedQueryError {
    /// The SQL text is missing or blank after trimming.
    #[error("sql_cannot_be_empty")]
    SqlCannotBeEmpty,

    /// The SQL text did not parse.
    #[error("invalid_sql: {0}")]
    InvalidSql(String),

    /// `verified_at` was neither an integer nor an all-digit string.
    #[error("bad_type_for_verified_at")]
    BadTypeForVerifiedAt,

    /// `verified_at` was an integer outside the representable calendar range.
    #[error("bad_timestamp_for_verified_at: {0}")]
    BadTimestamp(i64),
}

/// Errors reading or writing the document form of a model.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Unsupported file extension
    #[error("Unsupported file extension: {extension}. Supported: .yaml, .yml, .json")]
    UnsupportedExtension { extension: String },

    /// IO error reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse or emit error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse or emit error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
