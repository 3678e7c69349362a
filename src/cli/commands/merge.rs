//! Merge command implementation.

use std::path::Path;

use tracing::debug;

use super::print_json;
use crate::cli::file::read_json;
use crate::config::Settings;
use crate::error::Result;
use crate::model::{Task, TaskPatch};
use crate::sync::{MergeStrategy, merge_task};

/// Execute the merge command.
///
/// Without `--strategy` the configured default applies. In table mode the
/// merged task is printed as a markdown line.
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed.
pub fn execute(
    local: &Path,
    remote: &Path,
    strategy: Option<MergeStrategy>,
    settings: &Settings,
    json: bool,
) -> Result<()> {
    let local: Task = read_json(local)?;
    let remote: TaskPatch = read_json(remote)?;
    let strategy = strategy.unwrap_or(settings.merge_strategy);
    debug!(%strategy, id = %local.id, "merging");

    let merged = merge_task(&local, &remote, strategy);

    if json {
        return print_json(&merged);
    }

    let codec = settings.codec()?;
    println!("{}", codec.encode(&merged));
    Ok(())
}
