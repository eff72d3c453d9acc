//! Identity error types.

use thiserror::Error;

/// Errors that can occur during identity operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No user is signed in.
    #[error("User not authenticated")]
    Unauthenticated,

    /// Reading or writing the session file failed.
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file could not be parsed or written.
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The session file holds something other than a JSON object.
    #[error("Corrupt session file: {0}")]
    Corrupt(String),
}

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;
