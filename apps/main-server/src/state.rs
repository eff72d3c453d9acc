//! Application state.

use std::sync::Arc;

use flashcards::FlashcardCursor;
use record_store::DocumentStore;
use study_backend::StudyBackend;
use tokio::sync::RwLock;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: DocumentStore> {
    /// Server configuration.
    pub config: Config,
    /// Study backend holding the store and the session identity.
    pub backend: StudyBackend<S>,
    /// Flashcard viewer position.
    pub flashcards: RwLock<FlashcardCursor>,
}

impl<S: DocumentStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, backend: StudyBackend<S>) -> Self {
        Self {
            config,
            backend,
            flashcards: RwLock::new(FlashcardCursor::default()),
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and backend.
pub fn create_shared_state<S: DocumentStore>(
    config: Config,
    backend: StudyBackend<S>,
) -> SharedState<S> {
    Arc::new(AppState::new(config, backend))
}

#[cfg(test)]
pub(crate) mod test_support {
    use identity::{MemorySessionStore, Session};
    use record_store::MemoryDocumentStore;

    use super::*;

    /// State over in-memory storage with nobody signed in.
    pub async fn test_state() -> SharedState<MemoryDocumentStore> {
        let config = Config::from_lookup(|_| None).unwrap();
        let session = Session::restore(MemorySessionStore::new()).await.unwrap();
        create_shared_state(config, StudyBackend::new(MemoryDocumentStore::new(), session))
    }

    /// State over in-memory storage with a signed-in user.
    pub async fn signed_in_state() -> SharedState<MemoryDocumentStore> {
        let state = test_state().await;
        state.backend.login_user("student@school.edu").await.unwrap();
        state
    }

    #[tokio::test]
    async fn test_state_carries_config() {
        let state = test_state().await;

        assert_eq!(state.config.server_addr(), "0.0.0.0:54872");
        assert!(state.backend.current_user_id().await.is_err());
    }
}
