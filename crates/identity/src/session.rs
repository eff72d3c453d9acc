//! The signed-in user context.

use tokio::sync::RwLock;

use crate::{IdentityError, IdentityResult, SessionStore, SESSION_KEY};

/// Holds the current user identity and keeps it in sync with a
/// [`SessionStore`].
///
/// The identity is read once from storage by [`Session::restore`], replaced
/// by [`Session::sign_in`] and cleared by [`Session::sign_out`].
pub struct Session {
    store: Box<dyn SessionStore>,
    current: RwLock<Option<String>>,
}

impl Session {
    /// Restores the session persisted in `store`, if any.
    pub async fn restore(store: impl SessionStore + 'static) -> IdentityResult<Self> {
        let current = store.load(SESSION_KEY).await?;
        match &current {
            Some(user_id) => tracing::info!(user_id = %user_id, "Restored session"),
            None => tracing::debug!("No persisted session"),
        }

        Ok(Self {
            store: Box::new(store),
            current: RwLock::new(current),
        })
    }

    /// Returns the signed-in user id, if any.
    pub async fn current_user(&self) -> Option<String> {
        self.current.read().await.clone()
    }

    /// Returns the signed-in user id or fails with
    /// [`IdentityError::Unauthenticated`].
    pub async fn require_user(&self) -> IdentityResult<String> {
        self.current_user()
            .await
            .ok_or(IdentityError::Unauthenticated)
    }

    /// Persists `user_id` and makes it the current identity.
    pub async fn sign_in(&self, user_id: &str) -> IdentityResult<()> {
        self.store.save(SESSION_KEY, user_id).await?;
        *self.current.write().await = Some(user_id.to_string());
        Ok(())
    }

    /// Clears the persisted and in-memory identity.
    pub async fn sign_out(&self) -> IdentityResult<()> {
        self.store.remove(SESSION_KEY).await?;
        *self.current.write().await = None;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileSessionStore, MemorySessionStore};

    #[tokio::test]
    async fn test_fresh_session_is_unauthenticated() {
        let session = Session::restore(MemorySessionStore::new()).await.unwrap();

        assert!(session.current_user().await.is_none());
        assert!(matches!(
            session.require_user().await,
            Err(IdentityError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let session = Session::restore(MemorySessionStore::new()).await.unwrap();

        session.sign_in("user-1").await.unwrap();
        assert_eq!(session.require_user().await.unwrap(), "user-1");

        session.sign_out().await.unwrap();
        assert!(session.current_user().await.is_none());

        // Signing out twice is harmless
        session.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn test_restore_reads_persisted_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::restore(FileSessionStore::new(&path)).await.unwrap();
        session.sign_in("user-7").await.unwrap();
        drop(session);

        let restored = Session::restore(FileSessionStore::new(&path)).await.unwrap();
        assert_eq!(restored.current_user().await, Some("user-7".to_string()));

        restored.sign_out().await.unwrap();
        let cleared = Session::restore(FileSessionStore::new(&path)).await.unwrap();
        assert!(cleared.current_user().await.is_none());
    }
}
