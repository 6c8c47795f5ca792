//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Opaque task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}

/// Insert/upsert model for task records.
///
/// `AsChangeset` skips the primary key, so the same struct drives both the
/// insert values and the `ON CONFLICT` replacement set.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct UpsertTaskRow {
    /// Opaque task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
}
