//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{TaskRow, UpsertTaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates a repository with a fresh pool for the given connection URL.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
    /// established.
    pub fn connect(database_url: &str) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let id = task
            .id()
            .cloned()
            .unwrap_or_else(TaskId::generate);
        let persisted = task.clone().with_id(id.clone());
        let row = UpsertTaskRow {
            id: id.into_inner(),
            title: persisted.title().to_owned(),
            description: persisted.description().to_owned(),
            completed: persisted.completed(),
        };

        self.run_blocking(move |connection| {
            let _affected = diesel::insert_into(tasks::table)
                .values(&row)
                .on_conflict(tasks::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await?;

        Ok(persisted)
    }

    async fn delete_by_id(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let raw_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            // Zero affected rows means the identifier was absent, which the
            // port contract treats as a no-op.
            let _affected = diesel::delete(tasks::table.filter(tasks::id.eq(raw_id)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let id = TaskId::new(row.id).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::new(row.title, row.description, row.completed).with_id(id))
}
