//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entities::ValidationError;
use identity::LOGIN_ENTRY_POINT;
use rpc_protocol::{ApiError, ErrorCode, ErrorResponse};
use study_backend::BackendError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("{0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required.
    #[error("User not authenticated")]
    AuthenticationRequired,

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ValidationError> for ServerError {
    fn from(e: ValidationError) -> Self {
        ServerError::InvalidRequest(e.to_string())
    }
}

impl From<BackendError> for ServerError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::Validation(e) => e.into(),
            BackendError::Unauthenticated => ServerError::AuthenticationRequired,
            BackendError::Storage(e) if e.is_not_found() => ServerError::NotFound(e.to_string()),
            BackendError::Storage(e) => ServerError::Storage(e.to_string()),
            BackendError::SessionPersistence(e) => ServerError::Storage(e.to_string()),
        }
    }
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            ServerError::AuthenticationRequired => {
                (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized)
            }
            ServerError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if let ServerError::Storage(message) = &self {
            tracing::error!(error = %message, "Request failed with storage error");
        }

        let redirect = matches!(self, ServerError::AuthenticationRequired)
            .then(|| LOGIN_ENTRY_POINT.to_string());

        let body = ErrorResponse {
            error: ApiError::new(code, self.to_string()),
            redirect,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use record_store::StoreError;

    use super::*;

    #[test]
    fn test_backend_error_mapping() {
        assert!(matches!(
            ServerError::from(BackendError::Unauthenticated),
            ServerError::AuthenticationRequired
        ));
        assert!(matches!(
            ServerError::from(BackendError::Validation(ValidationError::InvalidEmail)),
            ServerError::InvalidRequest(_)
        ));
        assert!(matches!(
            ServerError::from(BackendError::Storage(StoreError::not_found("tasks", "t1"))),
            ServerError::NotFound(_)
        ));
        assert!(matches!(
            ServerError::from(BackendError::Storage(StoreError::Database("down".to_string()))),
            ServerError::Storage(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServerError::AuthenticationRequired.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::InvalidRequest("bad".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::NotFound("gone".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Storage("down".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
