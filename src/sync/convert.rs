//! Conversions between markdown tasks and the external tracker schemas.
//!
//! | markdown | Todoist | Things |
//! |---|---|---|
//! | `content` | `content` | `title` |
//! | `notes` | `description` | `notes` |
//! | `priority` 1..3 | `priority` 4..2 (`5 - p`) | `high-priority` tag for 1 |
//! | `due` | `due.date` | `due` |
//! | `recurrence` | `due.string` when `is_recurring` | (dropped) |
//! | `tags` | `labels` | `tags` |
//!
//! None of these functions mutate their input.

use tracing::trace;

use crate::model::{
    PRIORITY_HIGH, PRIORITY_LOW, Task, TaskLocation, ThingsInboxTask, TodoistDue, TodoistTask,
    TodoistTaskDraft, task_id,
};

/// Tag used to carry top priority through Things, which has no priorities.
pub const HIGH_PRIORITY_TAG: &str = "high-priority";

/// Todoist priorities run 1 (normal) to 4 (urgent).
const TODOIST_PRIORITY_MAX: u8 = 5;

/// Convert a markdown task into a Todoist task body.
#[must_use]
pub fn to_todoist(task: &Task) -> TodoistTaskDraft {
    TodoistTaskDraft {
        content: task.content.clone(),
        description: task.notes.clone().unwrap_or_default(),
        is_completed: task.completed,
        labels: task.tags.clone(),
        priority: task
            .priority
            .filter(|p| (PRIORITY_HIGH..=PRIORITY_LOW).contains(p))
            .map(|p| TODOIST_PRIORITY_MAX - p),
        due: task.due.as_ref().map(|due| TodoistDue {
            date: due.clone(),
            string: due.clone(),
            lang: "en".to_string(),
            is_recurring: task.recurrence.is_some(),
        }),
    }
}

/// Convert a Todoist task into a markdown task.
///
/// With `file` context the id is `<path>:<line>`, otherwise
/// `todoist:<id>`. Todoist's "normal" priority (1) has no markdown
/// counterpart and becomes no priority.
#[must_use]
pub fn from_todoist(task: &TodoistTask, file: Option<(&str, usize)>) -> Task {
    let (id, location) = native_identity("todoist", &task.id, file);

    let mut native = Task::new(id, task.content.clone()).with_location(location);
    native.notes = Some(task.description.clone()).filter(|d| !d.is_empty());
    native.completed = task.is_completed;
    native.tags = task.labels.clone();
    native.priority = task
        .priority
        .filter(|p| (2..=4).contains(p))
        .map(|p| TODOIST_PRIORITY_MAX - p);

    if let Some(due) = &task.due {
        native.due = Some(due.date.clone());
        if due.is_recurring {
            native.recurrence = Some(due.string.clone());
        }
    }

    trace!(id = %native.id, "converted from todoist");
    native
}

/// Convert a markdown task into a Things inbox task.
#[must_use]
pub fn to_things(task: &Task) -> ThingsInboxTask {
    let mut tags = task.tags.clone();
    if task.priority == Some(PRIORITY_HIGH) {
        tags.push(HIGH_PRIORITY_TAG.to_string());
    }

    ThingsInboxTask {
        id: task.id.clone(),
        title: task.content.clone(),
        notes: task.notes.clone().unwrap_or_default(),
        due: task.due.clone(),
        tags,
    }
}

/// Convert a Things inbox task into a markdown task.
///
/// A `high-priority` tag is consumed and becomes priority 1.
#[must_use]
pub fn from_things(task: &ThingsInboxTask, file: Option<(&str, usize)>) -> Task {
    let (id, location) = native_identity("things", &task.id, file);

    let mut native = Task::new(id, task.title.clone()).with_location(location);
    native.notes = Some(task.notes.clone()).filter(|n| !n.is_empty());
    native.due = task.due.clone();

    let (flags, tags): (Vec<String>, Vec<String>) =
        task.tags.iter().cloned().partition(|t| t == HIGH_PRIORITY_TAG);
    native.tags = tags;
    if !flags.is_empty() {
        native.priority = Some(PRIORITY_HIGH);
    }

    trace!(id = %native.id, "converted from things");
    native
}

/// Id and location for a task coming from an external tracker.
fn native_identity(
    source: &str,
    external_id: &str,
    file: Option<(&str, usize)>,
) -> (String, TaskLocation) {
    match file {
        Some((path, line)) if !path.is_empty() && line > 0 => {
            (task_id(path, line), TaskLocation::detached(path, line))
        }
        Some((path, line)) => (
            format!("{source}:{external_id}"),
            TaskLocation::detached(path, line),
        ),
        None => (format!("{source}:{external_id}"), TaskLocation::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_task_line;

    fn todoist(priority: Option<u8>) -> TodoistTask {
        TodoistTask {
            id: "8812".into(),
            content: "Renew passport".into(),
            description: "Bring photos".into(),
            is_completed: false,
            labels: vec!["admin".into()],
            priority,
            due: None,
        }
    }

    #[test]
    fn test_to_todoist_maps_fields() {
        let task = parse_task_line(
            "- [ ] Renew passport 🔺 📅 2024-09-01 🔁 every year #admin",
            "life.md",
            3,
        )
        .unwrap();
        let draft = to_todoist(&task);

        assert_eq!(draft.content, "Renew passport");
        assert_eq!(draft.description, "");
        assert!(!draft.is_completed);
        assert_eq!(draft.labels, vec!["admin"]);
        assert_eq!(draft.priority, Some(4));
        assert_eq!(
            draft.due,
            Some(TodoistDue {
                date: "2024-09-01".into(),
                string: "2024-09-01".into(),
                lang: "en".into(),
                is_recurring: true,
            })
        );
    }

    #[test]
    fn test_to_todoist_without_priority_or_due() {
        let draft = to_todoist(&Task::new("a.md:1", "Plain").with_notes("n"));
        assert_eq!(draft.priority, None);
        assert_eq!(draft.due, None);
        assert_eq!(draft.description, "n");
    }

    #[test]
    fn test_priority_round_trip_through_todoist() {
        for p in [1, 2, 3] {
            let draft = to_todoist(&Task::new("a.md:1", "x").with_priority(p));
            let remote = todoist(draft.priority);
            assert_eq!(from_todoist(&remote, None).priority, Some(p));
        }
    }

    #[test]
    fn test_from_todoist_normal_priority_is_absent() {
        assert_eq!(from_todoist(&todoist(Some(1)), None).priority, None);
        assert_eq!(from_todoist(&todoist(None), None).priority, None);
        assert_eq!(from_todoist(&todoist(Some(9)), None).priority, None);
    }

    #[test]
    fn test_from_todoist_identity() {
        let detached = from_todoist(&todoist(None), None);
        assert_eq!(detached.id, "todoist:8812");
        assert_eq!(detached.file, TaskLocation::default());

        let placed = from_todoist(&todoist(None), Some(("inbox.md", 12)));
        assert_eq!(placed.id, "inbox.md:12");
        assert_eq!(placed.file.path, "inbox.md");
        assert_eq!(placed.file.line, 12);
        assert_eq!(placed.file.position.end, 0);

        let zero_line = from_todoist(&todoist(None), Some(("inbox.md", 0)));
        assert_eq!(zero_line.id, "todoist:8812");
    }

    #[test]
    fn test_from_todoist_recurring_due() {
        let mut remote = todoist(None);
        remote.due = Some(TodoistDue {
            date: "2024-09-02".into(),
            string: "every monday".into(),
            lang: "en".into(),
            is_recurring: true,
        });
        let task = from_todoist(&remote, None);

        assert_eq!(task.due.as_deref(), Some("2024-09-02"));
        assert_eq!(task.recurrence.as_deref(), Some("every monday"));
        assert_eq!(task.notes.as_deref(), Some("Bring photos"));
        assert_eq!(task.tags, vec!["admin"]);
    }

    #[test]
    fn test_from_todoist_one_off_due_has_no_recurrence() {
        let mut remote = todoist(None);
        remote.description = String::new();
        remote.due = Some(TodoistDue {
            date: "2024-09-02".into(),
            string: "Sep 2".into(),
            lang: "en".into(),
            is_recurring: false,
        });
        let task = from_todoist(&remote, None);

        assert_eq!(task.recurrence, None);
        assert_eq!(task.notes, None);
    }

    #[test]
    fn test_to_things_adds_high_priority_tag_on_copy() {
        let task = Task::new("a.md:4", "Call mum")
            .with_priority(1)
            .with_due("2024-02-02")
            .with_tags(["family"]);
        let things = to_things(&task);

        assert_eq!(things.id, "a.md:4");
        assert_eq!(things.title, "Call mum");
        assert_eq!(things.notes, "");
        assert_eq!(things.due.as_deref(), Some("2024-02-02"));
        assert_eq!(things.tags, vec!["family", "high-priority"]);
        assert_eq!(task.tags, vec!["family"]);
    }

    #[test]
    fn test_to_things_lower_priority_has_no_tag() {
        let things = to_things(&Task::new("a.md:4", "x").with_priority(2));
        assert!(things.tags.is_empty());
        assert_eq!(things.due, None);
    }

    #[test]
    fn test_from_things_high_priority_tag() {
        let things = ThingsInboxTask {
            id: "T-1".into(),
            title: "Pay bill".into(),
            notes: String::new(),
            due: Some("2024-03-03".into()),
            tags: vec!["x".into(), "high-priority".into()],
        };
        let task = from_things(&things, None);

        assert_eq!(task.priority, Some(1));
        assert_eq!(task.tags, vec!["x"]);
        assert_eq!(task.id, "things:T-1");
        assert_eq!(task.content, "Pay bill");
        assert_eq!(task.due.as_deref(), Some("2024-03-03"));
        assert!(!task.completed);
        assert_eq!(things.tags.len(), 2);
    }

    #[test]
    fn test_from_things_without_flag() {
        let things = ThingsInboxTask {
            id: "T-2".into(),
            title: "Read".into(),
            notes: "chapter 4".into(),
            due: None,
            tags: Vec::new(),
        };
        let task = from_things(&things, Some(("reading.md", 5)));

        assert_eq!(task.priority, None);
        assert_eq!(task.notes.as_deref(), Some("chapter 4"));
        assert_eq!(task.id, "reading.md:5");
    }

    #[test]
    fn test_things_json_due_is_null() {
        let json = serde_json::to_value(to_things(&Task::new("a.md:1", "x"))).unwrap();
        assert!(json["due"].is_null());
    }
}
