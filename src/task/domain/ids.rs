//! Identifier types for the task domain.

use super::TaskDomainError;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a task record.
///
/// Identifiers are assigned by the persistence layer on first save (as
/// UUIDv4 strings) but remain opaque to the rest of the system: any non-empty
/// string a client forces onto a record via an update is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier from an opaque string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(raw))
    }

    /// Creates a new random identifier for a record being inserted.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
