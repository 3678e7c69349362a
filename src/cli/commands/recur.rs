//! Recur command implementation.

use colored::Colorize;

use super::print_json;
use crate::error::Result;
use crate::markdown::parse_recurrence;

/// Execute the recur command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(phrase: &[String], json: bool) -> Result<()> {
    let recurrence = parse_recurrence(&phrase.join(" "));

    if json {
        return print_json(&recurrence);
    }

    println!("{}", recurrence.raw.bold());
    let Some(unit) = recurrence.unit else {
        println!("  {}", "not a recognised recurrence".yellow());
        return Ok(());
    };

    println!("  unit:     {}", unit.to_string().blue().bold());
    if let Some(interval) = recurrence.interval {
        println!("  interval: {interval}");
    }
    if let Some(weekdays) = &recurrence.weekdays {
        println!("  weekdays: {}", weekdays.join(", "));
    }
    if let Some(day) = recurrence.month_day {
        println!("  day:      {day}");
    }
    Ok(())
}
