//! Task model for tasksync.
//!
//! A [`Task`] is one checkbox line from a markdown document, decoded into
//! its semantic fields. [`TaskPatch`] is the partial form used as the
//! remote side of a merge.

use serde::{Deserialize, Deserializer, Serialize};

/// Highest native priority (🔺).
pub const PRIORITY_HIGH: u8 = 1;
/// Medium native priority (🔼).
pub const PRIORITY_MEDIUM: u8 = 2;
/// Lowest native priority (🔽).
pub const PRIORITY_LOW: u8 = 3;

/// Character span of a task within its source line.
///
/// Always the full line for parsed tasks and `0..0` for tasks synthesized
/// from an external tracker. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Where a task lives in the vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLocation {
    /// Source file path (empty when the task has no file context)
    pub path: String,

    /// 1-based line number (0 when the task has no file context)
    pub line: usize,

    /// Span within the line
    #[serde(default)]
    pub position: Span,
}

impl TaskLocation {
    /// Location for a parsed line, spanning the whole line.
    #[must_use]
    pub fn for_line(path: &str, line: usize, line_text: &str) -> Self {
        Self {
            path: path.to_string(),
            line,
            position: Span {
                start: 0,
                end: line_text.chars().count(),
            },
        }
    }

    /// Location for a task with no file context (or an external-only one).
    #[must_use]
    pub fn detached(path: &str, line: usize) -> Self {
        Self {
            path: path.to_string(),
            line,
            position: Span::default(),
        }
    }
}

/// Optional timestamps carried alongside a task.
///
/// Never produced by the line parser; preserved verbatim by converters
/// and merges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// A markdown checkbox task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// `<path>:<line>`, or `todoist:<id>` / `things:<id>` without file context
    pub id: String,

    /// Title with every recognised metadata token removed
    pub content: String,

    /// Free-form notes (never present on a parsed line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// True iff the status character is `x` or `X`
    #[serde(default)]
    pub completed: bool,

    /// Semantic status name, or the literal status character when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// 1 (highest) to 3 (lowest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// Due date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,

    /// Scheduled date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,

    /// Completion date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<String>,

    /// Raw recurrence phrase, e.g. `every 2 weeks on monday`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,

    /// Tags without the leading `#`
    #[serde(default)]
    pub tags: Vec<String>,

    /// Source location
    #[serde(default)]
    pub file: TaskLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TaskMetadata>,
}

impl Task {
    /// Create an open task with the given id and title and no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            notes: None,
            completed: false,
            status: None,
            priority: None,
            due: None,
            scheduled: None,
            done: None,
            recurrence: None,
            tags: Vec::new(),
            file: TaskLocation::default(),
            metadata: None,
        }
    }

    /// Set the due date.
    #[must_use]
    pub fn with_due(mut self, due: &str) -> Self {
        self.due = Some(due.to_string());
        self
    }

    /// Set the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replace the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the source location.
    #[must_use]
    pub fn with_location(mut self, file: TaskLocation) -> Self {
        self.file = file;
        self
    }
}

/// Build the native id for a task at a file position.
#[must_use]
pub fn task_id(path: &str, line: usize) -> String {
    format!("{path}:{line}")
}

/// A partial task, as received from a remote copy.
///
/// Optional-valued fields are double options: the outer `None` means
/// "not mentioned", `Some(None)` means "explicitly cleared". In JSON, a
/// missing key is the former and `null` the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Option<u8>>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub due: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub done: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<Option<TaskMetadata>>,
}

/// Deserialize a present key (even `null`) as `Some(..)`.
///
/// Combined with `#[serde(default)]`, a missing key stays `None`.
fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
