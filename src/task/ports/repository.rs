//! Repository port for task persistence.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The port adds no retry, caching, or validation on top of the underlying
/// store; every [`save`](TaskRepository::save) and
/// [`delete_by_id`](TaskRepository::delete_by_id) call mutates durable state
/// immediately.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns all stored tasks.
    ///
    /// The returned order is store-defined and not part of the contract.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Saves a task, returning the persisted record.
    ///
    /// A task without an identifier is inserted under a freshly generated
    /// one. A task carrying an identifier replaces the stored record, or is
    /// inserted under that identifier when no such record exists (upsert).
    /// The returned task always carries its identifier.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Deletes the task with the given identifier.
    ///
    /// Deleting an identifier with no stored record is a silent no-op.
    async fn delete_by_id(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
