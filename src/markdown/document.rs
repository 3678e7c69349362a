//! Whole-document task scanning and in-place line rewrites.

use tracing::debug;

use super::codec::{LineCodec, default_codec};
use crate::model::Task;

impl LineCodec {
    /// Decode every task line in `text`, in line order.
    ///
    /// Line numbers are 1-based.
    #[must_use]
    pub fn extract_all(&self, text: &str, path: &str) -> Vec<Task> {
        let tasks: Vec<Task> = text
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| self.decode(line, path, index + 1))
            .collect();
        debug!(path, count = tasks.len(), "extracted tasks");
        tasks
    }

    /// Replace line `line_number` (1-based) with the encoding of `task`.
    ///
    /// Every other line is left byte-identical, and a `\r` ending on the
    /// replaced line is kept. Out-of-range line numbers return `text`
    /// unchanged.
    #[must_use]
    pub fn update_line(&self, text: &str, line_number: usize, task: &Task) -> String {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if line_number == 0 || line_number > lines.len() {
            debug!(line_number, total = lines.len(), "line out of range, document unchanged");
            return text.to_string();
        }

        let old = lines[line_number - 1];
        let mut replacement = self.encode(task);
        if old.ends_with('\r') {
            replacement.push('\r');
        }
        lines[line_number - 1] = &replacement;
        lines.join("\n")
    }
}

/// Decode every task line in `text` with the default marker set.
#[must_use]
pub fn extract_tasks(text: &str, path: &str) -> Vec<Task> {
    default_codec().extract_all(text, path)
}

/// Rewrite one line of `text` with the default marker set.
#[must_use]
pub fn update_task_line(text: &str, line_number: usize, task: &Task) -> String {
    default_codec().update_line(text, line_number, task)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Groceries\n- [ ] Buy milk 📅 2024-01-01 #errand\nSome notes";

    #[test]
    fn test_extract_only_task_lines() {
        let tasks = extract_tasks(DOC, "lists/groceries.md");

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].file.line, 2);
        assert_eq!(tasks[0].file.path, "lists/groceries.md");
        assert_eq!(tasks[0].id, "lists/groceries.md:2");
        assert_eq!(tasks[0].content, "Buy milk");
    }

    #[test]
    fn test_extract_preserves_order() {
        let doc = "- [ ] One\n\n- [x] Two\n  - [ ] Three";
        let tasks = extract_tasks(doc, "a.md");

        let lines: Vec<usize> = tasks.iter().map(|t| t.file.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(tasks[2].content, "Three");
    }

    #[test]
    fn test_extract_empty_document() {
        assert!(extract_tasks("", "a.md").is_empty());
    }

    #[test]
    fn test_update_changes_only_target_line() {
        let mut task = extract_tasks(DOC, "g.md").remove(0);
        task.completed = true;
        task.done = Some("2024-01-02".into());

        let updated = update_task_line(DOC, 2, &task);
        let before: Vec<&str> = DOC.split('\n').collect();
        let after: Vec<&str> = updated.split('\n').collect();

        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1], "- [x] Buy milk 📅 2024-01-01 ✅ 2024-01-02 #errand");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let task = Task::new("x", "Anything");
        assert_eq!(update_task_line(DOC, 0, &task), DOC);
        assert_eq!(update_task_line(DOC, 4, &task), DOC);
    }

    #[test]
    fn test_update_keeps_crlf() {
        let doc = "- [ ] A\r\n- [ ] B\r\n";
        let task = Task::new("x", "B2");

        let updated = update_task_line(doc, 2, &task);
        assert_eq!(updated, "- [ ] A\r\n- [ ] B2\r\n");

        let tasks = extract_tasks(&updated, "a.md");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].content, "B2");
    }

    #[test]
    fn test_update_trailing_newline_line_is_addressable() {
        let doc = "- [ ] A\n";
        let task = Task::new("x", "Tail");
        assert_eq!(update_task_line(doc, 2, &task), "- [ ] A\n- [ ] Tail");
    }
}
