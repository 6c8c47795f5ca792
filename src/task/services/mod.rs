//! Application services for task management.

mod tasks;

pub use tasks::{TaskContent, TaskService, TaskServiceError, TaskServiceResult};
