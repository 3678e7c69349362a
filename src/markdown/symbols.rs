//! Status and priority tables, and the configurable marker set.
//!
//! Status characters are fixed by the checkbox convention. The
//! pictographic markers for dates, recurrence and priority are data: the
//! defaults match the Tasks plugin emoji format, and a config file may
//! replace them.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};

/// Status character → semantic status name.
pub const STATUS_SYMBOLS: &[(char, &str)] = &[
    (' ', "todo"),
    ('x', "done"),
    ('X', "done"),
    ('-', "cancelled"),
    ('>', "forwarded"),
    ('<', "scheduled"),
    ('!', "important"),
    ('?', "question"),
    ('*', "star"),
    ('l', "location"),
    ('b', "bookmark"),
    ('i', "information"),
    ('S', "savings"),
    ('I', "idea"),
    ('p', "pros"),
    ('c', "cons"),
    ('f', "fire"),
    ('k', "key"),
    ('w', "win"),
    ('u', "up"),
    ('d', "down"),
];

static STATUS_BY_SYMBOL: LazyLock<HashMap<char, &str>> =
    LazyLock::new(|| STATUS_SYMBOLS.iter().copied().collect());

// First entry wins, so `done` maps back to lower-case `x`.
static SYMBOL_BY_STATUS: LazyLock<HashMap<&str, char>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(symbol, name) in STATUS_SYMBOLS {
        map.entry(name).or_insert(symbol);
    }
    map
});

/// Semantic name for a status character, if it is a known one.
#[must_use]
pub fn status_name(symbol: char) -> Option<&'static str> {
    STATUS_BY_SYMBOL.get(&symbol).copied()
}

/// Status character for a semantic name, if it is a known one.
#[must_use]
pub fn status_symbol(name: &str) -> Option<char> {
    SYMBOL_BY_STATUS.get(name).copied()
}

/// Whether a status character marks the task as completed.
#[must_use]
pub fn is_done_symbol(symbol: char) -> bool {
    symbol.eq_ignore_ascii_case(&'x')
}

/// Metadata marker symbols.
///
/// For each priority class the first symbol is the one written when
/// formatting; all of them are recognised when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSet {
    pub due: String,
    pub scheduled: String,
    pub done: String,
    pub recurrence: String,
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            due: "📅".to_string(),
            scheduled: "⏳".to_string(),
            done: "✅".to_string(),
            recurrence: "🔁".to_string(),
            high: vec!["🔺".to_string(), "⏫".to_string(), "🔴".to_string()],
            medium: vec!["🔼".to_string(), "🟡".to_string()],
            low: vec!["🔽".to_string(), "⏬".to_string(), "🟢".to_string()],
        }
    }
}

impl MarkerSet {
    /// Priority classes in match order: high, medium, low.
    #[must_use]
    pub fn priority_classes(&self) -> [(u8, &[String]); 3] {
        [
            (PRIORITY_HIGH, self.high.as_slice()),
            (PRIORITY_MEDIUM, self.medium.as_slice()),
            (PRIORITY_LOW, self.low.as_slice()),
        ]
    }

    /// Symbol written for a priority level.
    #[must_use]
    pub fn priority_marker(&self, priority: u8) -> Option<&str> {
        let class = match priority {
            PRIORITY_HIGH => &self.high,
            PRIORITY_MEDIUM => &self.medium,
            PRIORITY_LOW => &self.low,
            _ => return None,
        };
        class.first().map(String::as_str)
    }

    /// Every marker symbol, in no particular order.
    pub fn all_symbols(&self) -> impl Iterator<Item = &str> {
        [&self.due, &self.scheduled, &self.done, &self.recurrence]
            .into_iter()
            .chain(self.high.iter())
            .chain(self.medium.iter())
            .chain(self.low.iter())
            .map(String::as_str)
    }

    /// Reject marker sets the codec cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarker`] if a marker is empty or whitespace,
    /// a priority class has no symbols, or a marker contains `#`.
    pub fn validate(&self) -> Result<()> {
        for (name, class) in [("high", &self.high), ("medium", &self.medium), ("low", &self.low)] {
            if class.is_empty() {
                return Err(Error::InvalidMarker(format!(
                    "priority class `{name}` has no symbols"
                )));
            }
        }

        for symbol in self.all_symbols() {
            if symbol.trim().is_empty() {
                return Err(Error::InvalidMarker("empty marker symbol".to_string()));
            }
            if symbol.contains('#') {
                return Err(Error::InvalidMarker(format!(
                    "marker `{symbol}` clashes with tag syntax"
                )));
            }
        }

        Ok(())
    }
}
