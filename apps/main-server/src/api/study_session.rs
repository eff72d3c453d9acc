//! Study session API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use entities::ValidationError;
use record_store::DocumentStore;
use rpc_protocol::{requests::*, responses::*};

use crate::error::ServerResult;
use crate::state::AppState;

/// Records a finished study session.
pub async fn create_study_session<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateStudySessionRequest>,
) -> ServerResult<Json<CreateStudySessionResponse>> {
    state.backend.current_user_id().await?;

    let start_time = request
        .start_time
        .ok_or_else(|| ValidationError::required("start time"))?;
    let end_time = request
        .end_time
        .ok_or_else(|| ValidationError::required("end time"))?;

    let session = state
        .backend
        .save_study_session(&request.subject, start_time, end_time)
        .await?;

    tracing::info!(
        session_id = %session.id,
        duration_minutes = session.duration_minutes,
        "Study session saved"
    );

    Ok(Json(CreateStudySessionResponse { session }))
}

/// Lists the current user's study sessions.
pub async fn list_study_sessions<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ListStudySessionsResponse>> {
    let sessions = state.backend.get_user_study_sessions().await?;

    Ok(Json(ListStudySessionsResponse { sessions }))
}
