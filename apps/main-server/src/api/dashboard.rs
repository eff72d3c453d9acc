//! Dashboard API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use entities::DashboardStats;
use record_store::DocumentStore;

use crate::error::ServerResult;
use crate::state::AppState;

/// Gets the current user's dashboard statistics.
pub async fn get_stats<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<DashboardStats>> {
    let stats = state.backend.get_dashboard_stats().await?;

    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};

    use super::*;
    use crate::error::ServerError;
    use crate::state::test_support::{signed_in_state, test_state};

    #[tokio::test]
    async fn test_dashboard_stats() {
        let state = signed_in_state().await;
        let backend = &state.backend;
        let due = NaiveDate::from_ymd_opt(2025, 10, 1);

        let done = backend.create_task("Done", "Art", due).await.unwrap();
        backend.toggle_task_completion(&done.id, true).await.unwrap();
        backend.create_task("Pending", "Art", due).await.unwrap();

        let start = Utc::now();
        backend
            .save_study_session("Art", start, start + Duration::minutes(25))
            .await
            .unwrap();
        backend
            .create_reflection("Sketching went well today", None)
            .await
            .unwrap();

        let Json(stats) = get_stats(State(state.clone())).await.unwrap();
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.total_study_time, 25);
        assert_eq!(stats.reflection_count, 1);
        assert_eq!(stats.recent_reflections.len(), 1);

        let body = serde_json::to_value(&stats).unwrap();
        assert_eq!(body["pendingTasks"], 1);
        assert_eq!(body["totalStudyTime"], 25);
    }

    #[tokio::test]
    async fn test_dashboard_requires_login() {
        let state = test_state().await;

        let result = get_stats(State(state)).await;
        assert!(matches!(result, Err(ServerError::AuthenticationRequired)));
    }
}
