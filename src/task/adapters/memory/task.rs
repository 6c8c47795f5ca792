//! In-memory repository for task storage in tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Iteration order over stored records is unspecified; callers must not rely
/// on [`find_all`](TaskRepository::find_all) ordering.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(tasks.values().cloned().collect())
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut tasks = self.tasks.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let id = task.id().cloned().unwrap_or_else(TaskId::generate);
        let persisted = task.clone().with_id(id.clone());
        tasks.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn delete_by_id(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Absent identifiers are a no-op per the port contract.
        tasks.remove(id);
        Ok(())
    }
}
