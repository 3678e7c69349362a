//! Map command implementation.

use std::path::Path;

use tracing::info;

use super::load_tasks;
use crate::cli::file::{to_jsonl, write_jsonl};
use crate::config::Settings;
use crate::error::Result;
use crate::model::TaskMapping;
use crate::sync::build_mapping;

/// Execute the map command.
///
/// Prints one mapping record per task as JSONL, or writes them to
/// `output`. External ids are left empty for the orchestrator to fill.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the output written.
pub fn execute(file: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let codec = settings.codec()?;
    let tasks = load_tasks(file, &codec, &settings.filter)?;
    let mappings: Vec<TaskMapping> = tasks.iter().map(|t| build_mapping(t, None, None)).collect();

    match output {
        Some(out) if crate::is_dry_run() => {
            info!(path = %out.display(), count = mappings.len(), "dry run, mappings not written");
            print!("{}", to_jsonl(&mappings)?);
        }
        Some(out) => {
            write_jsonl(out, &mappings)?;
            info!(path = %out.display(), count = mappings.len(), "wrote mappings");
        }
        None => print!("{}", to_jsonl(&mappings)?),
    }
    Ok(())
}
