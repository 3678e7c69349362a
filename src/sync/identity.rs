//! Identity mapping records.

use chrono::{DateTime, Utc};

use super::hash::{fingerprint, has_changed, task_content_hash};
use crate::model::{MappingLocation, Task, TaskMapping};

/// Build a mapping for `task`, stamped with the current time.
#[must_use]
pub fn build_mapping(task: &Task, todoist_id: Option<&str>, things_id: Option<&str>) -> TaskMapping {
    build_mapping_at(task, todoist_id, things_id, Utc::now())
}

/// Build a mapping for `task` with an explicit `last_synced` timestamp.
#[must_use]
pub fn build_mapping_at(
    task: &Task,
    todoist_id: Option<&str>,
    things_id: Option<&str>,
    now: DateTime<Utc>,
) -> TaskMapping {
    TaskMapping {
        task_id: task.id.clone(),
        todoist_id: todoist_id.map(str::to_string),
        things_id: things_id.map(str::to_string),
        fingerprint: fingerprint(task),
        last_synced: now,
        file: MappingLocation {
            path: task.file.path.clone(),
            line: task.file.line,
        },
        content_hash: task_content_hash(task),
    }
}

/// Whether `task` has meaningfully changed since `mapping` was built.
#[must_use]
pub fn mapping_is_stale(mapping: &TaskMapping, task: &Task) -> bool {
    has_changed(&task_content_hash(task), Some(&mapping.content_hash))
}
