//! Content hashing for cross-system sync.
//!
//! Two hashes are derived from a task:
//! - the **fingerprint** is loose: lower-cased, trimmed content and notes
//!   plus the due date. Tags, priority and completion are ignored so that
//!   the same task edited in another tracker still matches.
//! - the **content hash** is strict: a SHA256 of the serialized semantic
//!   fields, for "did anything change" checks.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::model::Task;

/// Compute a SHA256 hash of a serializable value.
///
/// The value is first serialized to JSON, then hashed.
///
/// # Panics
///
/// Panics if the value cannot be serialized to JSON. This should never happen
/// for our data types which are all serializable.
#[must_use]
pub fn content_hash<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_string(value).expect("serialization should not fail");
    sha256_hex(json.as_bytes())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Check if a task has changed since its hash was stored.
///
/// Returns `true` if there is no stored hash or the hashes differ.
#[must_use]
pub fn has_changed(current_hash: &str, stored_hash: Option<&str>) -> bool {
    stored_hash.is_none_or(|h| h != current_hash)
}

/// Loose identity hash: `content|notes|due`.
#[must_use]
pub fn fingerprint(task: &Task) -> String {
    let content = task.content.trim().to_lowercase();
    let notes = task.notes.as_deref().unwrap_or_default().trim().to_lowercase();
    let due = task.due.as_deref().unwrap_or_default();
    sha256_hex(format!("{content}|{notes}|{due}").as_bytes())
}

/// Fields covered by [`task_content_hash`], in serialization order.
#[derive(Serialize)]
struct HashedFields<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<&'a str>,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u8>,
}

/// Strict change-detection hash over content, notes, due, tags and priority.
#[must_use]
pub fn task_content_hash(task: &Task) -> String {
    content_hash(&HashedFields {
        content: &task.content,
        notes: task.notes.as_deref(),
        due: task.due.as_deref(),
        tags: &task.tags,
        priority: task.priority,
    })
}
