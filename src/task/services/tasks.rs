//! Service layer mapping task requests onto persistence-port operations.
//!
//! This is the decision-making core of the service: identifier assignment on
//! create, path-identifier authority on update, and full-replace semantics
//! throughout. Everything else is delegated to the injected repository.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Identifier-less task payload accepted by create and update operations.
///
/// Any identifier a client supplied alongside these fields has already been
/// discarded (create) or replaced by the path parameter (update) before the
/// payload reaches the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContent {
    title: String,
    description: String,
    completed: bool,
}

impl TaskContent {
    /// Creates a payload with the given title and description.
    ///
    /// The completion flag defaults to `false`.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    fn into_task(self) -> Task {
        Task::new(self.title, self.description, self.completed)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// The repository is injected through the constructor; the service holds no
/// other state and each operation is a single stateless request/response
/// cycle against the port.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all stored tasks in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Creates a new task, returning the persisted record with its assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, content: TaskContent) -> TaskServiceResult<Task> {
        let persisted = self.repository.save(&content.into_task()).await?;
        tracing::debug!(id = ?persisted.id(), "task created");
        Ok(persisted)
    }

    /// Replaces the task stored under `id` with the given payload.
    ///
    /// The path identifier is authoritative: it is forced onto the record
    /// before the write, and the replacement is full (no field of the old
    /// record survives). An identifier with no stored record inserts under
    /// that identifier rather than failing; the upsert is intentional.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when `id` is empty and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        id: impl Into<String>,
        content: TaskContent,
    ) -> TaskServiceResult<Task> {
        let task_id = TaskId::new(id)?;
        let record = content.into_task().with_id(task_id);
        let persisted = self.repository.save(&record).await?;
        tracing::debug!(id = ?persisted.id(), "task replaced");
        Ok(persisted)
    }

    /// Deletes the task stored under `id`.
    ///
    /// Deleting an absent identifier is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when `id` is empty and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: impl Into<String>) -> TaskServiceResult<()> {
        let task_id = TaskId::new(id)?;
        self.repository.delete_by_id(&task_id).await?;
        tracing::debug!(id = %task_id, "task deleted");
        Ok(())
    }
}
