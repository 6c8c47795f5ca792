//! Domain model for task records.
//!
//! The task domain models the single resource this service manages while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::Task;
