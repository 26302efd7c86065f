//! Error types and error handling for the coderag engine.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes,
//! `{success: false}` envelopes) is handled in the respective
//! adapter modules.

use thiserror::Error;

/// Result type alias for coderag operations
pub type Result<T> = std::result::Result<T, RagError>;

/// Main error type for the coderag engine
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Access denied: '{requested}' resolves outside the project root {root}")]
    PathTraversal { requested: String, root: String },

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("No documents indexed. Run rag_index_directory first.")]
    NotIndexed,

    #[error("No relevant context found for query: {0}")]
    NoRelevantContext(String),

    #[error("Completion failed: {0}")]
    Completion(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RagError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RagError::DirectoryNotFound(_) | RagError::NotIndexed | RagError::NoRelevantContext(_)
        )
    }

    /// Check if the caller supplied something that can never succeed
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RagError::PathTraversal { .. } | RagError::InvalidQuery(_) | RagError::ConfigError(_)
        )
    }
}
