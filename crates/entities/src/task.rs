//! Task record definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{OwnedRecord, Record, ValidationError, ValidationResult, validation::require_text};

/// A to-do item with a subject and due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Owning user ID.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Task title.
    pub title: String,
    /// Subject the task belongs to.
    pub subject: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task owned by `user_id`.
    ///
    /// Title and subject are trimmed and must not be blank; the due date
    /// must be present.
    pub fn new(
        user_id: impl Into<String>,
        title: &str,
        subject: &str,
        due_date: Option<NaiveDate>,
    ) -> ValidationResult<Self> {
        let title = require_text("title", title)?;
        let subject = require_text("subject", subject)?;
        let due_date = due_date.ok_or_else(|| ValidationError::required("due date"))?;

        Ok(Self {
            id: String::new(),
            user_id: user_id.into(),
            title,
            subject,
            due_date,
            completed: false,
            created_at: Utc::now(),
        })
    }

    /// Returns true if the task still needs doing.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Parses a `YYYY-MM-DD` due date as submitted by a form.
///
/// A blank value is treated as missing rather than malformed.
pub fn parse_due_date(value: Option<&str>) -> ValidationResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| ValidationError::Invalid {
                field: "due date",
                reason: e.to_string(),
            }),
    }
}

impl Record for Task {
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl OwnedRecord for Task {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, 14)
    }

    #[test]
    fn test_task_creation() {
        let task = Task::new("user-1", "  Essay draft ", "History", due()).unwrap();

        assert_eq!(task.title, "Essay draft");
        assert_eq!(task.subject, "History");
        assert_eq!(task.user_id, "user-1");
        assert!(!task.completed);
        assert!(task.is_pending());
    }

    #[test]
    fn test_task_requires_title_subject_and_due_date() {
        assert_eq!(
            Task::new("u", "   ", "Math", due()),
            Err(ValidationError::Required { field: "title" })
        );
        assert_eq!(
            Task::new("u", "Problem set", "", due()),
            Err(ValidationError::Required { field: "subject" })
        );
        assert_eq!(
            Task::new("u", "Problem set", "Math", None),
            Err(ValidationError::Required { field: "due date" })
        );
    }

    #[test]
    fn test_task_serializes_stored_field_names() {
        let task = Task::new("user-1", "Read", "Biology", due()).unwrap();
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["userID"], "user-1");
        assert_eq!(value["dueDate"], "2025-03-14");
        assert_eq!(value["completed"], false);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date(None).unwrap(), None);
        assert_eq!(parse_due_date(Some(" ")).unwrap(), None);
        assert_eq!(parse_due_date(Some("2025-03-14")).unwrap(), due());
        assert!(matches!(
            parse_due_date(Some("14/03/2025")),
            Err(ValidationError::Invalid { field: "due date", .. })
        ));
    }
}
