//! The study backend service.

use chrono::{DateTime, NaiveDate, Utc};
use entities::{
    validate_email, DashboardStats, Record, Reflection, StudySession, Task, User,
};
use identity::Session;
use record_store::{typed, Document, DocumentStore};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{BackendError, BackendResult};

/// Record CRUD and dashboard aggregation for the signed-in user.
///
/// Every record operation checks the [`Session`] first and fails with
/// [`BackendError::Unauthenticated`] before touching storage when nobody is
/// signed in.
pub struct StudyBackend<S: DocumentStore> {
    store: S,
    session: Session,
    /// Serializes get-or-create so concurrent logins share one user.
    login_guard: Mutex<()>,
}

impl<S: DocumentStore> StudyBackend<S> {
    /// Creates a backend over `store`, using `session` as the identity gate.
    pub fn new(store: S, session: Session) -> Self {
        Self {
            store,
            session,
            login_guard: Mutex::new(()),
        }
    }

    /// Returns the underlying document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the session identity.
    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn require_user(&self) -> BackendResult<String> {
        self.session.require_user().await.map_err(|e| {
            tracing::debug!("Rejected request without a signed-in user");
            BackendError::from(e)
        })
    }

    // =========================================================================
    // User operations
    // =========================================================================

    /// Signs in by email, creating the user on first login.
    ///
    /// Calling this repeatedly with the same email always yields the same
    /// user; existing users are never modified.
    pub async fn login_user(&self, email: &str) -> BackendResult<User> {
        validate_email(email)?;
        tracing::info!(email = %email, "Attempting login");

        let _guard = self.login_guard.lock().await;
        let existing: Vec<User> =
            typed::records_where(&self.store, "email", Value::String(email.to_string())).await?;

        let user = match existing.into_iter().next() {
            Some(user) => {
                tracing::info!(user_id = %user.id, "User found, logging in");
                user
            }
            None => {
                tracing::info!("New user detected, creating account");
                typed::insert_record(&self.store, User::new(email)?).await?
            }
        };

        self.session.sign_in(&user.id).await?;
        Ok(user)
    }

    /// Signs out the current user. Signing out with nobody signed in is a
    /// no-op.
    pub async fn logout(&self) -> BackendResult<()> {
        self.session.sign_out().await?;
        tracing::info!("User logged out");
        Ok(())
    }

    /// Returns the signed-in user's id.
    pub async fn current_user_id(&self) -> BackendResult<String> {
        self.require_user().await
    }

    // =========================================================================
    // Task operations
    // =========================================================================

    /// Creates an incomplete task for the current user.
    pub async fn create_task(
        &self,
        title: &str,
        subject: &str,
        due_date: Option<NaiveDate>,
    ) -> BackendResult<Task> {
        let user_id = self.require_user().await?;
        let task = Task::new(user_id, title, subject, due_date)?;
        Ok(typed::insert_record(&self.store, task).await?)
    }

    /// Sets the completion flag of a task.
    pub async fn toggle_task_completion(&self, task_id: &str, completed: bool) -> BackendResult<()> {
        self.require_user().await?;
        tracing::info!(task_id = %task_id, completed, "Marking task");

        let mut fields = Document::new();
        fields.insert("completed".to_string(), Value::Bool(completed));
        self.store
            .update_fields(Task::COLLECTION, task_id, fields)
            .await
            .inspect_err(|e| tracing::error!(task_id = %task_id, error = %e, "Failed to update task"))?;
        Ok(())
    }

    /// Deletes a task.
    pub async fn delete_task(&self, task_id: &str) -> BackendResult<()> {
        self.require_user().await?;
        tracing::info!(task_id = %task_id, "Deleting task");

        self.store
            .delete(Task::COLLECTION, task_id)
            .await
            .inspect_err(|e| tracing::error!(task_id = %task_id, error = %e, "Failed to delete task"))?;
        Ok(())
    }

    /// Lists the current user's tasks, in no particular order.
    pub async fn get_user_tasks(&self) -> BackendResult<Vec<Task>> {
        let user_id = self.require_user().await?;
        Ok(typed::records_owned_by(&self.store, &user_id).await?)
    }

    // =========================================================================
    // Study session operations
    // =========================================================================

    /// Records a finished study session for the current user.
    pub async fn save_study_session(
        &self,
        subject: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BackendResult<StudySession> {
        let user_id = self.require_user().await?;
        let session = StudySession::new(user_id, subject, start_time, end_time)?;
        Ok(typed::insert_record(&self.store, session).await?)
    }

    /// Lists the current user's study sessions, in no particular order.
    pub async fn get_user_study_sessions(&self) -> BackendResult<Vec<StudySession>> {
        let user_id = self.require_user().await?;
        Ok(typed::records_owned_by(&self.store, &user_id).await?)
    }

    // =========================================================================
    // Reflection operations
    // =========================================================================

    /// Records a reflection, filed under the daily log unless `session_id`
    /// is given.
    pub async fn create_reflection(
        &self,
        text: &str,
        session_id: Option<String>,
    ) -> BackendResult<Reflection> {
        let user_id = self.require_user().await?;
        let reflection = Reflection::new(user_id, text, session_id)?;
        Ok(typed::insert_record(&self.store, reflection).await?)
    }

    /// Lists the current user's reflections, in no particular order.
    pub async fn get_user_reflections(&self) -> BackendResult<Vec<Reflection>> {
        let user_id = self.require_user().await?;
        Ok(typed::records_owned_by(&self.store, &user_id).await?)
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Fetches all three record collections concurrently and summarizes
    /// them. Any failed fetch fails the whole call.
    pub async fn get_dashboard_stats(&self) -> BackendResult<DashboardStats> {
        let user_id = self.require_user().await?;
        tracing::info!(user_id = %user_id, "Aggregating dashboard stats");

        let (tasks, sessions, reflections) = tokio::try_join!(
            typed::records_owned_by::<Task, _>(&self.store, &user_id),
            typed::records_owned_by::<StudySession, _>(&self.store, &user_id),
            typed::records_owned_by::<Reflection, _>(&self.store, &user_id),
        )?;

        Ok(DashboardStats::aggregate(&tasks, &sessions, reflections))
    }
}
