//! Cross-system sync primitives.
//!
//! This module provides the pure pieces an external sync orchestrator
//! needs to move markdown tasks between a vault, Todoist and Things:
//!
//! - **Hashing**: loose fingerprint for dedup, strict SHA256 content hash
//!   for change detection
//! - **Identity**: mapping records linking a task to its external copies
//! - **Convert**: markdown ↔ Todoist, markdown ↔ Things
//! - **Merge**: reconcile a local task with a remote patch
//! - **Filter**: pick which tasks take part
//!
//! Nothing here reads files, talks to a network, or keeps state.
//!
//! # Example
//!
//! ```ignore
//! use tasksync::markdown::extract_tasks;
//! use tasksync::sync::{build_mapping, merge_task, to_todoist, MergeStrategy};
//!
//! for task in extract_tasks(&text, "Inbox.md") {
//!     let draft = to_todoist(&task);
//!     let mapping = build_mapping(&task, None, None);
//! }
//! ```

mod convert;
mod filter;
mod hash;
mod identity;
mod merge;

pub use convert::{HIGH_PRIORITY_TAG, from_things, from_todoist, to_things, to_todoist};
pub use filter::TaskFilter;
pub use hash::{content_hash, fingerprint, has_changed, task_content_hash};
pub use identity::{build_mapping, build_mapping_at, mapping_is_stale};
pub use merge::{MergeStrategy, merge_task};
