//! Command implementations.

pub mod completions;
pub mod convert;
pub mod format;
pub mod map;
pub mod merge;
pub mod parse;
pub mod recur;
pub mod update;
pub mod version;

use std::path::Path;

use tracing::info;

use crate::cli::file::read_input;
use crate::error::Result;
use crate::markdown::LineCodec;
use crate::model::Task;
use crate::sync::TaskFilter;

/// Read a markdown file and decode its tasks, then apply `filter`.
///
/// Task ids and locations use the path as given on the command line.
fn load_tasks(file: &Path, codec: &LineCodec, filter: &TaskFilter) -> Result<Vec<Task>> {
    let text = read_input(file)?;
    let path = file.display().to_string();
    let tasks = codec.extract_all(&text, &path);
    let total = tasks.len();
    let kept = filter.apply(tasks);
    info!(path, total, kept = kept.len(), "loaded tasks");
    Ok(kept)
}

/// Print a value as a single JSON line.
fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
