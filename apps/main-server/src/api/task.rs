//! Task API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use entities::parse_due_date;
use record_store::DocumentStore;
use rpc_protocol::{requests::*, responses::*};

use crate::error::ServerResult;
use crate::state::AppState;

/// Creates a task for the current user.
///
/// Login is checked before the body is parsed, so a signed-out client is
/// redirected to login even when the body is malformed.
pub async fn create_task<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateTaskRequest>,
) -> ServerResult<Json<CreateTaskResponse>> {
    state.backend.current_user_id().await?;
    let due_date = parse_due_date(request.due_date.as_deref())?;

    let task = state
        .backend
        .create_task(&request.title, &request.subject, due_date)
        .await?;

    tracing::info!(task_id = %task.id, "Task created");

    Ok(Json(CreateTaskResponse { task }))
}

/// Lists the current user's tasks.
pub async fn list_tasks<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ListTasksResponse>> {
    let tasks = state.backend.get_user_tasks().await?;

    Ok(Json(ListTasksResponse { tasks }))
}

/// Sets a task's completion flag.
pub async fn toggle_task<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<ToggleTaskRequest>,
) -> ServerResult<Json<ToggleTaskResponse>> {
    state
        .backend
        .toggle_task_completion(&request.task_id, request.completed)
        .await?;

    Ok(Json(ToggleTaskResponse {}))
}

/// Deletes a task.
pub async fn delete_task<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<DeleteTaskRequest>,
) -> ServerResult<Json<DeleteTaskResponse>> {
    state.backend.delete_task(&request.task_id).await?;

    Ok(Json(DeleteTaskResponse {}))
}
