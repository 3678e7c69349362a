//! Version command implementation.

use std::path::Path;

use serde::Serialize;

use super::print_json;
use crate::config::resolve_config_path;
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput {
    version: &'static str,
    build: &'static str,
    config: Option<String>,
}

/// Execute the version command.
///
/// Also reports which config file would be read.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(config: Option<&Path>, json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) { "dev" } else { "release" };
    let config = resolve_config_path(config).map(|p| p.display().to_string());

    if json {
        return print_json(&VersionOutput {
            version,
            build,
            config,
        });
    }

    println!("tasksync version {version} ({build})");
    if let Some(path) = config {
        println!("config: {path}");
    }
    Ok(())
}
