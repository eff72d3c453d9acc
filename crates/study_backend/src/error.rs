//! Backend error types.

use entities::ValidationError;
use identity::IdentityError;
use record_store::StoreError;
use thiserror::Error;

/// Errors returned by [`StudyBackend`](crate::StudyBackend) operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Bad or missing input. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No user is signed in.
    #[error("User not authenticated")]
    Unauthenticated,

    /// The document store call failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Persisting or clearing the session identity failed.
    #[error("Session persistence error: {0}")]
    SessionPersistence(IdentityError),
}

impl From<IdentityError> for BackendError {
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::Unauthenticated => Self::Unauthenticated,
            other => Self::SessionPersistence(other),
        }
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
