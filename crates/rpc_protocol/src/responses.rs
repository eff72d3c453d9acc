//! API response types.

use entities::{Reflection, StudySession, Task, User};
use flashcards::CardView;
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user_id: String,
}

// ============================================================================
// Task Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTaskResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskResponse {}

// ============================================================================
// Study Session Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudySessionResponse {
    pub session: StudySession,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListStudySessionsResponse {
    pub sessions: Vec<StudySession>,
}

// ============================================================================
// Reflection Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReflectionResponse {
    pub reflection: Reflection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReflectionsResponse {
    pub reflections: Vec<Reflection>,
}

// ============================================================================
// Flashcard Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardResponse {
    pub card: CardView,
    /// Set when `next` was requested on the last card.
    #[serde(default)]
    pub end_of_deck: bool,
    /// User-facing notice accompanying `end_of_deck`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
