//! Update command implementation.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::cli::file::{atomic_write, read_json};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::model::Task;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateOutput {
    path: String,
    line: usize,
    before: String,
    after: String,
    dry_run: bool,
}

/// Execute the update command.
///
/// The target line must already be a task line; every other line of the
/// file is written back untouched.
///
/// # Errors
///
/// Returns [`Error::LineOutOfRange`] or [`Error::NotATask`] for a bad
/// target, or an I/O error if the file cannot be read or written.
pub fn execute(file: &Path, line: usize, task_input: &Path, settings: &Settings, json: bool) -> Result<()> {
    let codec = settings.codec()?;
    let path = file.display().to_string();
    let text = std::fs::read_to_string(file)?;

    let total = text.split('\n').count();
    if line == 0 || line > total {
        return Err(Error::LineOutOfRange { path, line, total });
    }

    let before = text.split('\n').nth(line - 1).unwrap_or_default().trim_end_matches('\r');
    if codec.decode(before, &path, line).is_none() {
        return Err(Error::NotATask { path, line });
    }

    let task: Task = read_json(task_input)?;
    let updated = codec.update_line(&text, line, &task);
    let after = codec.encode(&task);

    let dry_run = crate::is_dry_run();
    if dry_run {
        info!(path, line, "dry run, file not written");
    } else {
        atomic_write(file, &updated)?;
        info!(path, line, "rewrote task line");
    }

    if json {
        return print_json(&UpdateOutput {
            path,
            line,
            before: before.to_string(),
            after,
            dry_run,
        });
    }

    if dry_run {
        print!("{updated}");
        if !updated.ends_with('\n') {
            println!();
        }
    } else {
        println!("Updated {path}:{line}");
        println!("  - {before}");
        println!("  + {after}");
    }
    Ok(())
}
