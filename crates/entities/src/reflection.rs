//! Reflection record definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{OwnedRecord, Record, ValidationError, ValidationResult};

/// Session ID used when a reflection is not tied to a study session.
pub const DAILY_LOG_SESSION: &str = "daily_log";

/// Minimum reflection length, in characters, after trimming.
pub const MIN_REFLECTION_CHARS: usize = 10;

/// A short written reflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Owning user ID.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Related study session, or [`DAILY_LOG_SESSION`].
    pub session_id: String,
    /// Reflection text, trimmed.
    pub text: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Reflection {
    /// Creates a new reflection.
    pub fn new(
        user_id: impl Into<String>,
        text: &str,
        session_id: Option<String>,
    ) -> ValidationResult<Self> {
        let text = text.trim();
        if text.chars().count() < MIN_REFLECTION_CHARS {
            return Err(ValidationError::TooShort {
                field: "text",
                min: MIN_REFLECTION_CHARS,
            });
        }

        Ok(Self {
            id: String::new(),
            user_id: user_id.into(),
            session_id: session_id.unwrap_or_else(|| DAILY_LOG_SESSION.to_string()),
            text: text.to_string(),
            created_at: Utc::now(),
        })
    }
}

impl Record for Reflection {
    const COLLECTION: &'static str = "reflections";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl OwnedRecord for Reflection {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_length_boundary() {
        assert!(matches!(
            Reflection::new("u", "  123456789  ", None),
            Err(ValidationError::TooShort { min: 10, .. })
        ));

        let reflection = Reflection::new("u", "  1234567890  ", None).unwrap();
        assert_eq!(reflection.text, "1234567890");
    }

    #[test]
    fn test_reflection_counts_characters_not_bytes() {
        assert!(Reflection::new("u", "ééééééééé", None).is_err());
        assert!(Reflection::new("u", "éééééééééé", None).is_ok());
    }

    #[test]
    fn test_reflection_session_default() {
        let daily = Reflection::new("u", "Went over the notes again", None).unwrap();
        assert_eq!(daily.session_id, DAILY_LOG_SESSION);

        let linked =
            Reflection::new("u", "Went over the notes again", Some("s-1".to_string())).unwrap();
        assert_eq!(linked.session_id, "s-1");
    }
}
