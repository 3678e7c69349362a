//! Export and import command implementations.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::{load_tasks, print_json};
use crate::cli::file::read_json_list;
use crate::cli::{ImportArgs, Tracker};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::model::{Task, ThingsInboxTask, TodoistTask};
use crate::sync::{from_things, from_todoist, to_things, to_todoist};

#[derive(Serialize)]
struct ImportOutput {
    count: usize,
    tasks: Vec<Task>,
    lines: Vec<String>,
}

/// Execute the export command: markdown tasks to tracker JSON.
///
/// Output is always JSON, an array in the target schema.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn execute_export(file: &Path, target: Tracker, settings: &Settings) -> Result<()> {
    let codec = settings.codec()?;
    let tasks = load_tasks(file, &codec, &settings.filter)?;
    debug!(count = tasks.len(), ?target, "exporting");

    match target {
        Tracker::Todoist => {
            let drafts: Vec<_> = tasks.iter().map(to_todoist).collect();
            print_json(&drafts)
        }
        Tracker::Things => {
            let inbox: Vec<_> = tasks.iter().map(to_things).collect();
            print_json(&inbox)
        }
    }
}

/// Execute the import command: tracker JSON to markdown tasks.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `--path`/`--line` are given for
/// more than one task, or an error if the input cannot be parsed.
pub fn execute_import(args: &ImportArgs, settings: &Settings, json: bool) -> Result<()> {
    let codec = settings.codec()?;
    let tasks = import_tasks(&args.input, args.source, args.path.as_deref(), args.line)?;
    let lines: Vec<String> = tasks.iter().map(|t| codec.encode(t)).collect();

    if json {
        return print_json(&ImportOutput {
            count: tasks.len(),
            tasks,
            lines,
        });
    }

    for line in &lines {
        println!("{line}");
    }
    Ok(())
}

fn import_tasks(
    input: &Path,
    source: Tracker,
    path: Option<&str>,
    line: Option<usize>,
) -> Result<Vec<Task>> {
    let file = path.zip(line);

    let tasks: Vec<Task> = match source {
        Tracker::Todoist => read_json_list::<TodoistTask>(input)?
            .iter()
            .map(|t| from_todoist(t, file))
            .collect(),
        Tracker::Things => read_json_list::<ThingsInboxTask>(input)?
            .iter()
            .map(|t| from_things(t, file))
            .collect(),
    };

    if file.is_some() && tasks.len() > 1 {
        return Err(Error::InvalidArgument(format!(
            "--path/--line name a single location but the input holds {} tasks",
            tasks.len()
        )));
    }

    debug!(count = tasks.len(), ?source, "imported");
    Ok(tasks)
}
