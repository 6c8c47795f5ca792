//! Error-to-response mapping for the HTTP surface.

use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
///
/// This is the only error translation the core performs: domain validation
/// maps to a client error, everything from the persistence layer propagates
/// untranslated as a generic server error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain validation rejected the request.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The persistence layer failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// A persisted task came back without an identifier.
    #[error("persisted task is missing an identifier")]
    MissingId,
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::Domain(domain),
            TaskServiceError::Repository(repository) => Self::Repository(repository),
        }
    }
}

/// JSON body carried by error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) | Self::MissingId => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
