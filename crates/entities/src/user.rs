//! User record definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Record, ValidationError, ValidationResult};

/// A student identified by email.
///
/// Users are created on first login and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Email address, unique across users.
    pub email: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet persisted user.
    pub fn new(email: &str) -> ValidationResult<Self> {
        validate_email(email)?;
        Ok(Self {
            id: String::new(),
            email: email.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Checks the minimal email shape accepted at login.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("test@example.com").unwrap();

        assert_eq!(user.email, "test@example.com");
        assert!(user.id.is_empty());
    }

    #[test]
    fn test_user_rejects_bad_email() {
        assert_eq!(User::new(""), Err(ValidationError::InvalidEmail));
        assert_eq!(User::new("student"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_unsaved_user_omits_id() {
        let user = User::new("a@b.c").unwrap();
        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
