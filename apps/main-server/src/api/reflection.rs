//! Reflection API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use record_store::DocumentStore;
use rpc_protocol::{requests::*, responses::*};

use crate::error::ServerResult;
use crate::state::AppState;

/// Records a reflection.
pub async fn create_reflection<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateReflectionRequest>,
) -> ServerResult<Json<CreateReflectionResponse>> {
    let reflection = state
        .backend
        .create_reflection(&request.text, request.session_id)
        .await?;

    Ok(Json(CreateReflectionResponse { reflection }))
}

/// Lists the current user's reflections.
pub async fn list_reflections<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ListReflectionsResponse>> {
    let reflections = state.backend.get_user_reflections().await?;

    Ok(Json(ListReflectionsResponse { reflections }))
}
