//! Structured recurrence descriptor.

use serde::{Deserialize, Serialize};

/// Recurrence unit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceUnit {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceUnit {
    /// Get the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed recurrence phrase.
///
/// When `unit` is `None` the phrase was not understood: callers should
/// format `raw` faithfully but not compute schedules from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    /// Original phrase
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<RecurrenceUnit>,

    /// Positive repeat interval; set whenever `unit` is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,

    /// Lower-cased weekday names, weekly only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<String>>,

    /// Day of month, monthly only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_day: Option<u32>,

    /// Original phrase
    pub raw: String,
}

impl Recurrence {
    /// A descriptor carrying only the raw phrase.
    #[must_use]
    pub fn unparsed(phrase: &str) -> Self {
        Self {
            pattern: phrase.to_string(),
            unit: None,
            interval: None,
            weekdays: None,
            month_day: None,
            raw: phrase.to_string(),
        }
    }

    /// Whether a schedule can be computed from this descriptor.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.unit.is_some()
    }
}
