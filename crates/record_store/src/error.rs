//! Record store error types.

use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found.
    #[error("{collection} document not found: {id}")]
    NotFound { collection: String, id: String },

    /// Document body was not a JSON object.
    #[error("Invalid document in {collection}: {reason}")]
    InvalidDocument { collection: String, reason: String },

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Creates an invalid document error.
    pub fn invalid_document(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            collection: collection.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;
