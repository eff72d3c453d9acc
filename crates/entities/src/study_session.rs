//! Study session record definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{OwnedRecord, Record, ValidationError, ValidationResult, validation::require_text};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// A completed, timed block of study on one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Owning user ID.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Subject studied.
    pub subject: String,
    /// When the session started.
    pub start_time: DateTime<Utc>,
    /// When the session ended.
    pub end_time: DateTime<Utc>,
    /// Whole minutes studied, rounded up. Missing values read as 0.
    #[serde(default)]
    pub duration_minutes: i64,
}

impl StudySession {
    /// Creates a new study session, deriving its duration.
    pub fn new(
        user_id: impl Into<String>,
        subject: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        let duration_minutes = duration_minutes(start_time, end_time);
        if duration_minutes <= 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        let subject = require_text("subject", subject)?;

        Ok(Self {
            id: String::new(),
            user_id: user_id.into(),
            subject,
            start_time,
            end_time,
            duration_minutes,
        })
    }
}

/// Minutes between `start` and `end`, rounded up to the next whole minute.
///
/// Any positive sub-minute interval counts as one minute. Zero or negative
/// intervals yield a non-positive result.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_MINUTE);
    if millis.rem_euclid(MILLIS_PER_MINUTE) > 0 {
        whole + 1
    } else {
        whole
    }
}

impl Record for StudySession {
    const COLLECTION: &'static str = "studySessions";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl OwnedRecord for StudySession {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_duration_rounds_up() {
        let t = start();
        assert_eq!(duration_minutes(t, t + Duration::seconds(5)), 1);
        assert_eq!(duration_minutes(t, t + Duration::seconds(61)), 2);
        assert_eq!(duration_minutes(t, t + Duration::seconds(120)), 2);
        assert_eq!(duration_minutes(t, t + Duration::milliseconds(1)), 1);
    }

    #[test]
    fn test_duration_non_positive() {
        let t = start();
        assert_eq!(duration_minutes(t, t), 0);
        assert_eq!(duration_minutes(t, t - Duration::seconds(5)), 0);
        assert_eq!(duration_minutes(t, t - Duration::seconds(90)), -1);
    }

    #[test]
    fn test_session_creation() {
        let t = start();
        let session = StudySession::new("user-1", "Chemistry", t, t + Duration::minutes(45)).unwrap();

        assert_eq!(session.duration_minutes, 45);
        assert_eq!(session.subject, "Chemistry");
    }

    #[test]
    fn test_session_rejects_empty_interval() {
        let t = start();
        assert_eq!(
            StudySession::new("user-1", "Chemistry", t, t),
            Err(ValidationError::NonPositiveDuration)
        );
    }

    #[test]
    fn test_session_requires_subject() {
        let t = start();
        assert_eq!(
            StudySession::new("user-1", "  ", t, t + Duration::minutes(5)),
            Err(ValidationError::Required { field: "subject" })
        );
    }

    #[test]
    fn test_missing_duration_reads_as_zero() {
        let value = serde_json::json!({
            "userID": "user-1",
            "subject": "Art",
            "startTime": "2025-01-06T09:00:00Z",
            "endTime": "2025-01-06T09:30:00Z",
        });
        let session: StudySession = serde_json::from_value(value).unwrap();

        assert_eq!(session.duration_minutes, 0);
    }
}
