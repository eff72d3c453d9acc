//! Authentication API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use record_store::DocumentStore;
use rpc_protocol::{requests::*, responses::*};

use crate::error::ServerResult;
use crate::state::AppState;

/// Signs in by email, creating the user on first login.
pub async fn login<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<LoginResponse>> {
    let user = state.backend.login_user(&request.email).await?;

    Ok(Json(LoginResponse { user }))
}

/// Logs out the current user.
pub async fn logout<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<LogoutResponse>> {
    state.backend.logout().await?;

    Ok(Json(LogoutResponse {}))
}

/// Gets the current signed-in user's id.
pub async fn get_current_user<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<CurrentUserResponse>> {
    let user_id = state.backend.current_user_id().await?;

    Ok(Json(CurrentUserResponse { user_id }))
}
