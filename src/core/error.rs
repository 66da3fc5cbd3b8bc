//! Error types and error handling for the related pages engine.
//!
//! Registry problems surface as [`ConfigError`] and abort a build before
//! any content is processed. Query problems surface as [`QueryError`] and
//! never touch the published snapshot. [`RelatedError`] wraps both together
//! with the I/O and parsing failures of the surrounding adapters.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate-level operations
pub type Result<T> = std::result::Result<T, RelatedError>;

/// Invalid or conflicting index registration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Index already registered: {0}")]
    DuplicateIndex(String),

    #[error("Index '{name}' has invalid weight {weight}: weight must be a positive number")]
    InvalidWeight { name: String, weight: f64 },

    #[error("Index name cannot be empty")]
    EmptyIndexName,

    #[error("Index '{name}' has cardinality threshold high ({high}) below low ({low})")]
    InvalidThresholds { name: String, low: usize, high: usize },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Relatedness query failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown index: {0}")]
    UnknownIndex(String),

    #[error("Query criteria cannot be empty")]
    EmptyCriteria,

    #[error("No indices configured for related content")]
    NoIndicesConfigured,

    #[error("Document not found: {0}")]
    UnknownDocument(String),
}

/// Main error type for the related pages crate
#[derive(Error, Debug)]
pub enum RelatedError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Content error in {path:?}: {message}")]
    Content { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RelatedError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RelatedError::Query(QueryError::UnknownIndex(_))
                | RelatedError::Query(QueryError::UnknownDocument(_))
        )
    }

    /// Check if this is a caller error (template or configuration mistake)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RelatedError::Config(_)
                | RelatedError::Query(QueryError::EmptyCriteria)
                | RelatedError::Query(QueryError::NoIndicesConfigured)
                | RelatedError::Content { .. }
        )
    }
}
