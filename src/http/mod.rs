//! HTTP surface for taskdeck.
//!
//! Routing and serialization stay thin here: handlers translate wire shapes
//! into service calls and map service errors onto status codes. All
//! substantive behaviour lives in the task service and its repository.

mod error;
mod greeting;
mod tasks;

pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

/// Builds the service router over the given task service.
///
/// The repository behind the service is the only shared resource; the router
/// itself holds no per-request state.
pub fn router<R>(service: TaskService<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(greeting::greet))
        .route("/tasks", get(tasks::list::<R>).post(tasks::create::<R>))
        .route(
            "/tasks/{id}",
            put(tasks::update::<R>).delete(tasks::remove::<R>),
        )
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}
