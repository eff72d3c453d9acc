//! Dashboard summary statistics.

use serde::{Deserialize, Serialize};

use crate::{Reflection, StudySession, Task};

/// Number of reflections surfaced on the dashboard.
pub const RECENT_REFLECTIONS: usize = 3;

/// Summary of one user's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Tasks not yet completed.
    pub pending_tasks: usize,
    /// Total minutes across all study sessions.
    pub total_study_time: i64,
    /// Number of reflections.
    pub reflection_count: usize,
    /// Up to three reflections, newest first.
    pub recent_reflections: Vec<Reflection>,
}

impl DashboardStats {
    /// Folds already-fetched records into dashboard statistics.
    pub fn aggregate(
        tasks: &[Task],
        sessions: &[StudySession],
        mut reflections: Vec<Reflection>,
    ) -> Self {
        let pending_tasks = tasks.iter().filter(|t| t.is_pending()).count();
        let total_study_time = sessions.iter().map(|s| s.duration_minutes).sum();
        let reflection_count = reflections.len();

        // Stable sort keeps store order among equal timestamps.
        reflections.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reflections.truncate(RECENT_REFLECTIONS);

        Self {
            pending_tasks,
            total_study_time,
            reflection_count,
            recent_reflections: reflections,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    use super::*;

    fn task(completed: bool) -> Task {
        let mut task = Task::new("u", "Task", "Math", NaiveDate::from_ymd_opt(2025, 5, 1)).unwrap();
        task.completed = completed;
        task
    }

    fn session(minutes: i64) -> StudySession {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let mut session =
            StudySession::new("u", "Math", start, start + Duration::minutes(1)).unwrap();
        session.duration_minutes = minutes;
        session
    }

    fn reflection(text: &str, minutes_ago: i64) -> Reflection {
        let mut reflection = Reflection::new("u", text, None).unwrap();
        reflection.created_at = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap()
            - Duration::minutes(minutes_ago);
        reflection
    }

    #[test]
    fn test_aggregate() {
        let tasks = vec![task(false), task(true), task(false)];
        let sessions = vec![session(10), session(0), session(5)];
        let reflections = (0..5)
            .map(|i| reflection(&format!("reflection number {i}"), i))
            .collect();

        let stats = DashboardStats::aggregate(&tasks, &sessions, reflections);

        assert_eq!(stats.pending_tasks, 2);
        assert_eq!(stats.total_study_time, 15);
        assert_eq!(stats.reflection_count, 5);
        assert_eq!(stats.recent_reflections.len(), 3);
    }

    #[test]
    fn test_recent_reflections_newest_first() {
        let reflections = vec![
            reflection("oldest entry here", 30),
            reflection("newest entry here", 0),
            reflection("middle entry here", 10),
            reflection("older entry here!", 20),
        ];

        let stats = DashboardStats::aggregate(&[], &[], reflections);
        let texts: Vec<&str> = stats.recent_reflections.iter().map(|r| r.text.as_str()).collect();

        assert_eq!(
            texts,
            vec!["newest entry here", "middle entry here", "older entry here!"]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = DashboardStats::aggregate(&[], &[], Vec::new());

        assert_eq!(stats.pending_tasks, 0);
        assert_eq!(stats.total_study_time, 0);
        assert_eq!(stats.reflection_count, 0);
        assert!(stats.recent_reflections.is_empty());
    }

    #[test]
    fn test_fewer_than_three_reflections() {
        let stats = DashboardStats::aggregate(&[], &[], vec![reflection("only one reflection", 0)]);
        assert_eq!(stats.recent_reflections.len(), 1);
    }
}
