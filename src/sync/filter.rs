//! Selecting which tasks take part in a sync.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::Task;

/// Include/exclude rules over tags, folders and statuses.
///
/// Empty lists impose no constraint. Exclusions are checked first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskFilter {
    /// Keep tasks carrying any of these tags
    pub tags: Vec<String>,
    /// Drop tasks carrying any of these tags
    pub exclude_tags: Vec<String>,
    /// Keep tasks whose file lies under any of these folders
    pub folders: Vec<String>,
    /// Drop tasks whose file lies under any of these folders
    pub exclude_folders: Vec<String>,
    /// Keep tasks with one of these status names
    pub statuses: Vec<String>,
}

impl TaskFilter {
    /// Whether the filter has no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.exclude_tags.is_empty()
            && self.folders.is_empty()
            && self.exclude_folders.is_empty()
            && self.statuses.is_empty()
    }

    /// Whether `task` passes the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let has_tag = |wanted: &[String]| task.tags.iter().any(|t| wanted.contains(t));
        let in_folder = |folders: &[String]| folders.iter().any(|f| under(&task.file.path, f));

        if has_tag(&self.exclude_tags) || in_folder(&self.exclude_folders) {
            return false;
        }
        if !self.tags.is_empty() && !has_tag(&self.tags) {
            return false;
        }
        if !self.folders.is_empty() && !in_folder(&self.folders) {
            return false;
        }
        if !self.statuses.is_empty() {
            let status = task.status.as_deref().unwrap_or("todo");
            if !self.statuses.iter().any(|s| s == status) {
                return false;
            }
        }
        true
    }

    /// Keep only the tasks that pass.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        if self.is_empty() {
            return tasks;
        }
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}

/// Component-wise prefix check, so `Projects` does not match `ProjectsOld/`.
fn under(path: &str, folder: &str) -> bool {
    let folder = folder.trim_end_matches('/');
    folder.is_empty() || Path::new(path).starts_with(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskLocation;

    fn task(path: &str, tags: &[&str], status: Option<&str>) -> Task {
        let mut task = Task::new(format!("{path}:1"), "x")
            .with_tags(tags.iter().copied())
            .with_location(TaskLocation::detached(path, 1));
        task.status = status.map(str::to_string);
        task
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TaskFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&task("a.md", &[], None)));
    }

    #[test]
    fn test_tag_include_and_exclude() {
        let filter = TaskFilter {
            tags: vec!["work".into()],
            exclude_tags: vec!["private".into()],
            ..TaskFilter::default()
        };

        assert!(filter.matches(&task("a.md", &["work"], None)));
        assert!(!filter.matches(&task("a.md", &["home"], None)));
        assert!(!filter.matches(&task("a.md", &["work", "private"], None)));
    }

    #[test]
    fn test_folder_rules_use_path_components() {
        let filter = TaskFilter {
            folders: vec!["Projects/".into()],
            exclude_folders: vec!["Projects/Archive".into()],
            ..TaskFilter::default()
        };

        assert!(filter.matches(&task("Projects/site.md", &[], None)));
        assert!(!filter.matches(&task("ProjectsOld/site.md", &[], None)));
        assert!(!filter.matches(&task("Projects/Archive/old.md", &[], None)));
        assert!(!filter.matches(&task("Daily/2024-01-01.md", &[], None)));
    }

    #[test]
    fn test_status_rule_defaults_to_todo() {
        let filter = TaskFilter {
            statuses: vec!["todo".into(), "important".into()],
            ..TaskFilter::default()
        };

        assert!(filter.matches(&task("a.md", &[], None)));
        assert!(filter.matches(&task("a.md", &[], Some("important"))));
        assert!(!filter.matches(&task("a.md", &[], Some("done"))));
    }

    #[test]
    fn test_apply_keeps_order() {
        let filter = TaskFilter {
            exclude_tags: vec!["skip".into()],
            ..TaskFilter::default()
        };
        let tasks = vec![
            task("a.md", &[], None),
            task("b.md", &["skip"], None),
            task("c.md", &[], None),
        ];

        let kept: Vec<String> = filter.apply(tasks).into_iter().map(|t| t.id).collect();
        assert_eq!(kept, vec!["a.md:1", "c.md:1"]);
    }

    #[test]
    fn test_filter_from_json() {
        let filter: TaskFilter =
            serde_json::from_str(r#"{"excludeFolders": ["Templates"]}"#).unwrap();
        assert_eq!(filter.exclude_folders, vec!["Templates"]);
        assert!(filter.tags.is_empty());
    }
}
