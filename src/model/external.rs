//! Schemas of the external trackers.
//!
//! - [`TodoistTask`] / [`TodoistTaskDraft`]: the cloud task manager
//!   (priority 1 = normal, 4 = urgent)
//! - [`ThingsInboxTask`]: the local inbox app

use serde::{Deserialize, Serialize};

/// Structured due date on a Todoist task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoistDue {
    /// Machine-readable date
    pub date: String,

    /// Human-readable form; the recurrence phrase when `is_recurring`
    pub string: String,

    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default)]
    pub is_recurring: bool,
}

fn default_lang() -> String {
    "en".to_string()
}

/// A task as stored by Todoist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoistTask {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<TodoistDue>,
}

/// The fields of a Todoist task that a markdown task can supply.
///
/// Has no `id`: Todoist assigns one on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoistTaskDraft {
    pub content: String,
    pub description: String,
    pub is_completed: bool,
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<TodoistDue>,
}

/// A task in the Things inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingsInboxTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    /// Serialized as `null` when absent
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
