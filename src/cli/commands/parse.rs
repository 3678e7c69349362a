//! Parse command implementation.

use colored::Colorize;
use serde::Serialize;

use super::{load_tasks, print_json};
use crate::cli::ParseArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::model::{PRIORITY_HIGH, PRIORITY_MEDIUM, Task};

#[derive(Serialize)]
struct ParseOutput {
    path: String,
    count: usize,
    tasks: Vec<Task>,
}

/// Execute the parse command.
///
/// The configured filter applies first, then `--tag` and `--status`
/// narrow it further.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the markers are invalid.
pub fn execute(args: &ParseArgs, settings: &Settings, json: bool) -> Result<()> {
    let codec = settings.codec()?;
    let mut filter = settings.filter.clone();
    filter.tags.extend(args.tags.iter().cloned());
    filter.statuses.extend(args.statuses.iter().cloned());

    let tasks = load_tasks(&args.file, &codec, &filter)?;

    if crate::is_csv() {
        println!("line,status,priority,due,content,tags");
        for task in &tasks {
            println!(
                "{},{},{},{},{},{}",
                task.file.line,
                task.status.as_deref().unwrap_or("todo"),
                task.priority.map(|p| p.to_string()).unwrap_or_default(),
                task.due.as_deref().unwrap_or(""),
                crate::csv_escape(&task.content),
                crate::csv_escape(&task.tags.join(" ")),
            );
        }
    } else if json {
        let output = ParseOutput {
            path: args.file.display().to_string(),
            count: tasks.len(),
            tasks,
        };
        print_json(&output)?;
    } else if tasks.is_empty() {
        println!("No tasks found.");
    } else {
        print_task_list(&tasks);
    }

    Ok(())
}

fn print_task_list(tasks: &[Task]) {
    println!("{} ({} found):", "Tasks".bold().underline(), tasks.len());
    println!();
    for task in tasks {
        let checkbox = if task.completed {
            "[x]".green().to_string()
        } else {
            "[ ]".normal().to_string()
        };
        let content = match task.priority {
            Some(PRIORITY_HIGH) => task.content.red().bold().to_string(),
            Some(PRIORITY_MEDIUM) => task.content.yellow().to_string(),
            _ => task.content.clone(),
        };

        print!("{:>5}  {checkbox} {content}", task.file.line.to_string().dimmed());
        if let Some(due) = &task.due {
            print!("  {}", format!("due {due}").blue());
        }
        if let Some(recurrence) = &task.recurrence {
            print!("  {}", recurrence.cyan());
        }
        for tag in &task.tags {
            print!(" {}", format!("#{tag}").magenta());
        }
        println!();
    }
}
