//! Cross-system identity mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File position recorded on a mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingLocation {
    pub path: String,
    pub line: usize,
}

/// Links a markdown task to its counterparts in Todoist and Things.
///
/// Built fresh from a [`Task`](super::Task); persisting and updating it
/// over time is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMapping {
    /// Native task id (`<path>:<line>`)
    pub task_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todoist_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub things_id: Option<String>,

    /// Loose identity hash over content, notes and due date
    pub fingerprint: String,

    /// When this mapping was built
    pub last_synced: DateTime<Utc>,

    pub file: MappingLocation,

    /// Strict change-detection hash
    pub content_hash: String,
}
