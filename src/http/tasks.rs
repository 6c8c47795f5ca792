//! Request handlers for the task resource.

use super::ApiError;
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{TaskContent, TaskService},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

/// Task payload accepted by create and update requests.
///
/// Every field is optional on the wire; missing fields take their defaults
/// because create and update are full replacements, not merges. Any
/// client-supplied identifier is ignored on create and overridden by the path
/// parameter on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskBody {
    /// Client-supplied identifier, never authoritative.
    #[serde(default)]
    pub id: Option<String>,
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl TaskBody {
    fn into_content(self) -> TaskContent {
        TaskContent::new(self.title, self.description).with_completed(self.completed)
    }
}

/// Task record as serialized in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Assigned task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

impl TryFrom<Task> for TaskResponse {
    type Error = ApiError;

    fn try_from(task: Task) -> Result<Self, Self::Error> {
        let (id, title, description, completed) = task.into_parts();
        Ok(Self {
            id: id.ok_or(ApiError::MissingId)?,
            title,
            description,
            completed,
        })
    }
}

/// Handles `GET /tasks`.
pub async fn list<R>(
    State(service): State<TaskService<R>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository,
{
    let tasks = service.list().await.map_err(ApiError::from)?;
    let responses = tasks
        .into_iter()
        .map(TaskResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(responses))
}

/// Handles `POST /tasks`.
pub async fn create<R>(
    State(service): State<TaskService<R>>,
    Json(body): Json<TaskBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
{
    if let Some(ignored) = &body.id {
        tracing::debug!(id = %ignored, "ignoring client-supplied identifier on create");
    }
    let task = service
        .create(body.into_content())
        .await
        .map_err(ApiError::from)?;
    Ok(Json(TaskResponse::try_from(task)?))
}

/// Handles `PUT /tasks/{id}`.
///
/// The path identifier is authoritative over any identifier in the body, and
/// an unknown identifier inserts under that identifier (upsert).
pub async fn update<R>(
    State(service): State<TaskService<R>>,
    Path(id): Path<String>,
    Json(body): Json<TaskBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
{
    let task = service
        .update(id, body.into_content())
        .await
        .map_err(ApiError::from)?;
    Ok(Json(TaskResponse::try_from(task)?))
}

/// Handles `DELETE /tasks/{id}`.
///
/// Always responds `204 No Content`; deleting an absent identifier is a
/// silent no-op.
pub async fn remove<R>(
    State(service): State<TaskService<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
{
    service.delete(id).await.map_err(ApiError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
