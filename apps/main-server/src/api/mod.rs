//! API endpoints.

pub mod auth;
pub mod dashboard;
pub mod flashcard;
pub mod reflection;
pub mod study_session;
pub mod task;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use record_store::DocumentStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: DocumentStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::get_current_user))
        // Task endpoints
        .route("/api/task/create", post(task::create_task))
        .route("/api/task/list", post(task::list_tasks))
        .route("/api/task/toggle", post(task::toggle_task))
        .route("/api/task/delete", post(task::delete_task))
        // Study session endpoints
        .route("/api/study-session/create", post(study_session::create_study_session))
        .route("/api/study-session/list", post(study_session::list_study_sessions))
        // Reflection endpoints
        .route("/api/reflection/create", post(reflection::create_reflection))
        .route("/api/reflection/list", post(reflection::list_reflections))
        // Dashboard endpoints
        .route("/api/dashboard/stats", post(dashboard::get_stats))
        // Flashcard endpoints
        .route("/api/flashcards/current", get(flashcard::current_card))
        .route("/api/flashcards/flip", post(flashcard::flip_card))
        .route("/api/flashcards/next", post(flashcard::next_card))
        .route("/api/flashcards/prev", post(flashcard::prev_card))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
