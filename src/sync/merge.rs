//! Reconciling a local task with a remote copy.

use serde::{Deserialize, Serialize};

use crate::model::{Task, TaskPatch};

/// Conflict resolution strategy for a local/remote pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Keep the local task untouched.
    LocalWins,
    /// Take every field the remote provides.
    RemoteWins,
    /// Field-by-field: remote values where given, tags unioned.
    #[default]
    Merge,
}

impl MergeStrategy {
    /// Get the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LocalWins => "local_wins",
            Self::RemoteWins => "remote_wins",
            Self::Merge => "merge",
        }
    }
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MergeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "local_wins" | "local" => Ok(Self::LocalWins),
            "remote_wins" | "remote" => Ok(Self::RemoteWins),
            "merge" => Ok(Self::Merge),
            _ => Err(format!("Unknown merge strategy: {s}")),
        }
    }
}

/// Merge `remote` into `local` under `strategy`.
///
/// The file location is always the local one.
#[must_use]
pub fn merge_task(local: &Task, remote: &TaskPatch, strategy: MergeStrategy) -> Task {
    match strategy {
        MergeStrategy::LocalWins => local.clone(),
        MergeStrategy::RemoteWins => overlay(local, remote),
        MergeStrategy::Merge => field_merge(local, remote),
    }
}

/// Every field present in `remote` replaces the local one.
fn overlay(local: &Task, remote: &TaskPatch) -> Task {
    let mut merged = local.clone();

    if let Some(id) = &remote.id {
        merged.id.clone_from(id);
    }
    if let Some(content) = &remote.content {
        merged.content.clone_from(content);
    }
    if let Some(completed) = remote.completed {
        merged.completed = completed;
    }
    if let Some(tags) = &remote.tags {
        merged.tags.clone_from(tags);
    }

    take(&mut merged.notes, &remote.notes);
    take(&mut merged.status, &remote.status);
    take(&mut merged.priority, &remote.priority);
    take(&mut merged.due, &remote.due);
    take(&mut merged.scheduled, &remote.scheduled);
    take(&mut merged.done, &remote.done);
    take(&mut merged.recurrence, &remote.recurrence);
    take(&mut merged.metadata, &remote.metadata);

    merged
}

/// Remote values where explicitly given; tags unioned; identity,
/// status, done date and metadata stay local.
fn field_merge(local: &Task, remote: &TaskPatch) -> Task {
    let mut merged = local.clone();

    if let Some(content) = remote.content.as_ref().filter(|c| !c.is_empty()) {
        merged.content.clone_from(content);
    }
    if let Some(completed) = remote.completed {
        merged.completed = completed;
    }

    take(&mut merged.notes, &remote.notes);
    take(&mut merged.due, &remote.due);
    take(&mut merged.scheduled, &remote.scheduled);
    take(&mut merged.recurrence, &remote.recurrence);
    take(&mut merged.priority, &remote.priority);

    if let Some(tags) = &remote.tags {
        for tag in tags {
            if !merged.tags.contains(tag) {
                merged.tags.push(tag.clone());
            }
        }
    }
    let mut seen = std::collections::HashSet::new();
    merged.tags.retain(|t| seen.insert(t.clone()));

    merged
}

/// Apply an explicitly provided value, including an explicit clear.
fn take<T: Clone>(field: &mut Option<T>, remote: &Option<Option<T>>) {
    if let Some(value) = remote {
        field.clone_from(value);
    }
}
