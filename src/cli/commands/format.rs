//! Format command implementation.

use std::path::Path;

use serde::Serialize;

use super::print_json;
use crate::cli::file::read_json_list;
use crate::config::Settings;
use crate::error::Result;
use crate::model::Task;

#[derive(Serialize)]
struct FormatOutput {
    count: usize,
    lines: Vec<String>,
}

/// Execute the format command.
///
/// # Errors
///
/// Returns an error if the input is not a task or array of tasks.
pub fn execute(input: &Path, settings: &Settings, json: bool) -> Result<()> {
    let codec = settings.codec()?;
    let tasks: Vec<Task> = read_json_list(input)?;
    let lines: Vec<String> = tasks.iter().map(|t| codec.encode(t)).collect();

    if json {
        return print_json(&FormatOutput {
            count: lines.len(),
            lines,
        });
    }

    for line in &lines {
        println!("{line}");
    }
    Ok(())
}
