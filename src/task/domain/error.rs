//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty or whitespace-only.
    #[error("task identifier must not be empty")]
    EmptyTaskId,
}
