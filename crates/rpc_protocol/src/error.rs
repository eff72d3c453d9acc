//! API error types

use serde::{Deserialize, Serialize};

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request body failed validation
    InvalidRequest = -32600,
    /// Internal error, including storage failures
    InternalError = -32603,
    /// No user is signed in
    Unauthorized = -32001,
    /// The requested resource was not found
    NotFound = -32003,
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        match code {
            -32600 => ErrorCode::InvalidRequest,
            -32001 => ErrorCode::Unauthorized,
            -32003 => ErrorCode::NotFound,
            _ => ErrorCode::InternalError,
        }
    }
}

/// Error details returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl ApiError {
    /// Creates a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
        }
    }

    /// Returns the typed error code
    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from(self.code)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error envelope sent in every failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error
    pub error: ApiError,
    /// Where the client should navigate next, set when sign-in is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let response = ErrorResponse {
            error: ApiError::new(ErrorCode::NotFound, "Task not found"),
            redirect: None,
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("-32003"));
        assert!(json.contains("Task not found"));
        assert!(!json.contains("redirect"));
    }

    #[test]
    fn test_error_code_round_trip() {
        let error = ApiError::new(ErrorCode::Unauthorized, "User not authenticated");
        assert_eq!(error.error_code(), ErrorCode::Unauthorized);
        assert_eq!(ErrorCode::from(12345), ErrorCode::InternalError);
    }
}
