//! Recurrence phrase parser.
//!
//! Understands `every [N] day|week|month|year`, weekday names for weekly
//! rules and `on the N` for monthly ones. Units are tried in order (day,
//! week, month, year) and the first that matches is used, even when the
//! phrase mentions several.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Recurrence, RecurrenceUnit};

static UNITS: LazyLock<[(RecurrenceUnit, Regex); 4]> = LazyLock::new(|| {
    let unit = |word: &str| {
        Regex::new(&format!(r"(?i)every\s+(?:(\d+)\s+)?{word}")).expect("valid recurrence regex")
    };
    [
        (RecurrenceUnit::Daily, unit("day")),
        (RecurrenceUnit::Weekly, unit("week")),
        (RecurrenceUnit::Monthly, unit("month")),
        (RecurrenceUnit::Yearly, unit("year")),
    ]
});

static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)monday|tuesday|wednesday|thursday|friday|saturday|sunday")
        .expect("valid weekday regex")
});

static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\s+the\s+(\d+)").expect("valid month day regex"));

/// Parse a free-text recurrence phrase.
///
/// Never fails: an unrecognised phrase yields a descriptor with only
/// `pattern` and `raw` set.
#[must_use]
pub fn parse_recurrence(phrase: &str) -> Recurrence {
    let mut recurrence = Recurrence::unparsed(phrase);

    let Some((unit, caps)) = UNITS
        .iter()
        .find_map(|(unit, pattern)| pattern.captures(phrase).map(|caps| (*unit, caps)))
    else {
        return recurrence;
    };

    recurrence.unit = Some(unit);
    recurrence.interval = Some(
        caps.get(1)
            .and_then(|n| n.as_str().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1),
    );

    match unit {
        RecurrenceUnit::Weekly => {
            let weekdays: Vec<String> = WEEKDAY
                .find_iter(phrase)
                .map(|m| m.as_str().to_lowercase())
                .collect();
            if !weekdays.is_empty() {
                recurrence.weekdays = Some(weekdays);
            }
        }
        RecurrenceUnit::Monthly => {
            recurrence.month_day = MONTH_DAY
                .captures(phrase)
                .and_then(|caps| caps[1].parse().ok());
        }
        RecurrenceUnit::Daily | RecurrenceUnit::Yearly => {}
    }

    recurrence
}
