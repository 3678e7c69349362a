//! Markdown task line codec.
//!
//! Decoding matches the checkbox grammar, then runs the remainder of the
//! line through an ordered list of [`Extractor`] rules: due, scheduled,
//! done, recurrence, priority, tags. Each rule takes the residual text and
//! returns what is left plus the value it found, so a token removed by an
//! earlier rule is invisible to later ones. Whatever survives every rule
//! is the task's title.
//!
//! Encoding is canonical rather than round-trip exact: metadata is always
//! written in the same order regardless of where it appeared.
//!
//! ```ignore
//! let task = parse_task_line("- [ ] Buy milk 📅 2024-01-01 #errand", "todo.md", 1).unwrap();
//! assert_eq!(task.content, "Buy milk");
//! assert_eq!(format_task_line(&task), "- [ ] Buy milk 📅 2024-01-01 #errand");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::symbols::{MarkerSet, is_done_symbol, status_name, status_symbol};
use crate::error::Result;
use crate::model::{Task, TaskLocation, task_id};

/// `<indent>- [<status>] <rest>`
static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)-\s*\[(.)\]\s+(.+)$").expect("valid task line regex")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([\w-]+)\s*").expect("valid tag regex"));

static DEFAULT_CODEC: LazyLock<LineCodec> = LazyLock::new(|| {
    LineCodec::new(MarkerSet::default()).expect("default markers are valid")
});

/// Decode a line with the default marker set.
///
/// Returns `None` when the line is not a task line.
#[must_use]
pub fn parse_task_line(line: &str, path: &str, line_number: usize) -> Option<Task> {
    DEFAULT_CODEC.decode(line, path, line_number)
}

/// Encode a task with the default marker set.
#[must_use]
pub fn format_task_line(task: &Task) -> String {
    DEFAULT_CODEC.encode(task)
}

/// The codec compiled for the default marker set.
#[must_use]
pub fn default_codec() -> &'static LineCodec {
    &DEFAULT_CODEC
}

/// Which date field a date rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Due,
    Scheduled,
    Done,
}

/// A value pulled out of the line by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Extracted {
    Date(DateField, String),
    Recurrence(String),
    Priority(u8),
    Tags(Vec<String>),
}

/// One step of the metadata scan.
#[derive(Debug)]
enum Extractor {
    /// `<marker> YYYY-MM-DD`, first occurrence
    Date { field: DateField, pattern: Regex },
    /// `<marker> free text` up to the next marker or tag
    Recurrence { marker: String, stops: Vec<String> },
    /// First class with a symbol present wins
    Priority { classes: Vec<(u8, Regex)> },
    /// Every `#tag`
    Tags,
}

impl Extractor {
    fn date(field: DateField, marker: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"{}\s*([0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})\s*",
            regex::escape(marker)
        ))?;
        Ok(Self::Date { field, pattern })
    }

    fn priority(markers: &MarkerSet) -> Result<Self> {
        let mut classes = Vec::with_capacity(3);
        for (level, symbols) in markers.priority_classes() {
            let alternatives: Vec<String> = symbols.iter().map(|s| regex::escape(s)).collect();
            let pattern = Regex::new(&format!(r"(?:{})\s*", alternatives.join("|")))?;
            classes.push((level, pattern));
        }
        Ok(Self::Priority { classes })
    }

    /// Apply this rule to `residual`, returning the new residual and the
    /// extracted value, if any.
    fn extract(&self, residual: &str) -> (String, Option<Extracted>) {
        match self {
            Self::Date { field, pattern } => match pattern.captures(residual) {
                Some(caps) => {
                    let whole = caps.get(0).map_or(0..0, |m| m.range());
                    let value = caps[1].to_string();
                    (splice(residual, whole), Some(Extracted::Date(*field, value)))
                }
                None => (residual.to_string(), None),
            },

            Self::Recurrence { marker, stops } => {
                let Some(start) = residual.find(marker.as_str()) else {
                    return (residual.to_string(), None);
                };
                let after = start + marker.len();
                let tail = &residual[after..];
                let end = stops
                    .iter()
                    .filter_map(|stop| tail.find(stop.as_str()))
                    .min()
                    .map_or(residual.len(), |offset| after + offset);

                let phrase = residual[after..end].trim();
                let value = (!phrase.is_empty()).then(|| Extracted::Recurrence(phrase.to_string()));
                (splice(residual, start..end), value)
            }

            Self::Priority { classes } => {
                for (level, pattern) in classes {
                    if let Some(m) = pattern.find(residual) {
                        return (splice(residual, m.range()), Some(Extracted::Priority(*level)));
                    }
                }
                (residual.to_string(), None)
            }

            Self::Tags => {
                let tags: Vec<String> = TAG
                    .captures_iter(residual)
                    .map(|caps| caps[1].to_string())
                    .collect();
                if tags.is_empty() {
                    return (residual.to_string(), None);
                }
                let rest = TAG.replace_all(residual, "").trim().to_string();
                (rest, Some(Extracted::Tags(tags)))
            }
        }
    }
}

/// Remove `range` from `text` and trim the result.
fn splice(text: &str, range: std::ops::Range<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..range.start]);
    out.push_str(&text[range.end..]);
    out.trim().to_string()
}

/// Decoder/encoder for one marker set.
#[derive(Debug)]
pub struct LineCodec {
    markers: MarkerSet,
    rules: Vec<Extractor>,
}

impl LineCodec {
    /// Compile a codec for `markers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker set fails validation.
    pub fn new(markers: MarkerSet) -> Result<Self> {
        markers.validate()?;

        let mut stops: Vec<String> = markers.all_symbols().map(str::to_string).collect();
        stops.push("#".to_string());

        let rules = vec![
            Extractor::date(DateField::Due, &markers.due)?,
            Extractor::date(DateField::Scheduled, &markers.scheduled)?,
            Extractor::date(DateField::Done, &markers.done)?,
            Extractor::Recurrence {
                marker: markers.recurrence.clone(),
                stops,
            },
            Extractor::priority(&markers)?,
            Extractor::Tags,
        ];

        Ok(Self { markers, rules })
    }

    /// The marker set this codec was built from.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Decode one line. Returns `None` if it is not a task line.
    #[must_use]
    pub fn decode(&self, line: &str, path: &str, line_number: usize) -> Option<Task> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let caps = TASK_LINE.captures(line)?;
        let symbol = caps[2].chars().next()?;
        trace!(line_number, indent = caps[1].len(), %symbol, "task line");

        let mut task = Task::new(task_id(path, line_number), String::new())
            .with_location(TaskLocation::for_line(path, line_number, line));
        task.completed = is_done_symbol(symbol);
        task.status = Some(status_name(symbol).map_or_else(|| symbol.to_string(), str::to_string));

        let mut residual = caps[3].to_string();
        for rule in &self.rules {
            let (rest, value) = rule.extract(&residual);
            residual = rest;
            match value {
                Some(Extracted::Date(DateField::Due, date)) => task.due = Some(date),
                Some(Extracted::Date(DateField::Scheduled, date)) => task.scheduled = Some(date),
                Some(Extracted::Date(DateField::Done, date)) => task.done = Some(date),
                Some(Extracted::Recurrence(phrase)) => task.recurrence = Some(phrase),
                Some(Extracted::Priority(level)) => task.priority = Some(level),
                Some(Extracted::Tags(tags)) => task.tags = tags,
                None => {}
            }
        }

        task.content = residual.trim().to_string();
        Some(task)
    }

    /// Encode a task as a canonical markdown line.
    #[must_use]
    pub fn encode(&self, task: &Task) -> String {
        let mut line = format!("- [{}] {}", checkbox_symbol(task), task.content);

        if let Some(marker) = task.priority.and_then(|p| self.markers.priority_marker(p)) {
            line.push(' ');
            line.push_str(marker);
        }

        let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        if let Some(due) = present(&task.due) {
            line.push_str(&format!(" {} {due}", self.markers.due));
        }
        if let Some(scheduled) = present(&task.scheduled) {
            line.push_str(&format!(" {} {scheduled}", self.markers.scheduled));
        }
        if let Some(recurrence) = present(&task.recurrence) {
            line.push_str(&format!(" {} {recurrence}", self.markers.recurrence));
        }
        if task.completed {
            if let Some(done) = present(&task.done) {
                line.push_str(&format!(" {} {done}", self.markers.done));
            }
        }

        if !task.tags.is_empty() {
            let tags: Vec<String> = task.tags.iter().map(|t| format!("#{t}")).collect();
            line.push(' ');
            line.push_str(&tags.join(" "));
        }

        line
    }
}

/// The character between the brackets.
///
/// Completed tasks are `x`. Open tasks keep their alternate marker (`-`,
/// `?`, `I`, ...) when the status maps to one, so it survives re-encoding.
fn checkbox_symbol(task: &Task) -> char {
    if task.completed {
        return 'x';
    }

    task.status
        .as_deref()
        .and_then(|status| status_symbol(status).or_else(|| single_char(status)))
        .filter(|symbol| !is_done_symbol(*symbol))
        .unwrap_or(' ')
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '\n' => Some(c),
        _ => None,
    }
}
