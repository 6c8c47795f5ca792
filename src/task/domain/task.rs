//! The task record managed by this service.

use super::TaskId;

/// A single task record.
///
/// A task carries no identifier until the persistence layer assigns one on
/// first save. Updates force the path-supplied identifier onto the record
/// before the write, so the identifier present here is always authoritative
/// at save time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: String,
    completed: bool,
}

impl Task {
    /// Creates a task record with no identifier.
    ///
    /// The persistence layer assigns an identifier when the record is first
    /// saved.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Forces an identifier onto the record.
    ///
    /// Used by updates, where the path parameter overrides any identifier a
    /// client placed in the request body, and by adapters reconstructing
    /// persisted records.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the identifier, if the record has been assigned one.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Decomposes the record into its fields.
    #[must_use]
    pub fn into_parts(self) -> (Option<TaskId>, String, String, bool) {
        (self.id, self.title, self.description, self.completed)
    }
}
