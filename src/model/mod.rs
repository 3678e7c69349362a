//! Data models for tasksync.
//!
//! This module contains all domain models:
//! - Task, TaskPatch, TaskLocation
//! - Recurrence
//! - TaskMapping
//! - Todoist and Things task schemas

pub mod external;
pub mod mapping;
pub mod recurrence;
pub mod task;

pub use external::{ThingsInboxTask, TodoistDue, TodoistTask, TodoistTaskDraft};
pub use mapping::{MappingLocation, TaskMapping};
pub use recurrence::{Recurrence, RecurrenceUnit};
pub use task::{
    PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, Span, Task, TaskLocation, TaskMetadata,
    TaskPatch, task_id,
};
