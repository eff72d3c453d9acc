//! Validation errors raised by record constructors.

use thiserror::Error;

/// Input rejected while building a record.
///
/// Constructors return this before anything is handed to storage, so a
/// failed validation never leaves a partial record behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("Validation failed: {field} required")]
    Required { field: &'static str },

    /// The email address is empty or has no `@`.
    #[error("Validation failed: valid email required")]
    InvalidEmail,

    /// A text field is shorter than its minimum length.
    #[error("Validation failed: {field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// A study session ended at or before its start.
    #[error("Validation failed: duration must be positive")]
    NonPositiveDuration,

    /// A value could not be parsed.
    #[error("Validation failed: invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ValidationError {
    /// Creates a required-field error.
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }
}

/// Result type for record construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("title", "  Essay  ").unwrap(), "Essay");
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        assert_eq!(
            require_text("subject", " \t\n"),
            Err(ValidationError::Required { field: "subject" })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::required("title").to_string(),
            "Validation failed: title required"
        );
        assert_eq!(
            ValidationError::TooShort { field: "text", min: 10 }.to_string(),
            "Validation failed: text must be at least 10 characters"
        );
    }
}
