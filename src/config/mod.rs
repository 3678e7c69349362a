//! Configuration management.
//!
//! Settings live in a single JSON file, by default
//! `~/.tasksync/config.json`:
//!
//! ```json
//! {
//!   "markers": { "due": "📅", "high": ["🔺", "⏫"] },
//!   "mergeStrategy": "remote_wins",
//!   "filter": { "excludeFolders": ["Templates"] },
//!   "debug": false
//! }
//! ```
//!
//! Every key is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::markdown::{LineCodec, MarkerSet};
use crate::sync::{MergeStrategy, TaskFilter};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TASKSYNC_CONFIG";

/// Environment variable overriding the default merge strategy.
pub const MERGE_STRATEGY_ENV: &str = "TASKSYNC_MERGE_STRATEGY";

/// tasksync settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Metadata marker symbols
    pub markers: MarkerSet,

    /// Strategy used by `merge` when none is given
    pub merge_strategy: MergeStrategy,

    /// Which tasks `parse`, `export` and `map` consider
    pub filter: TaskFilter,

    /// Log at debug level unless `RUST_LOG` or `-v` say otherwise
    pub debug: bool,
}

impl Settings {
    /// Compile a line codec for the configured markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker set is invalid.
    pub fn codec(&self) -> Result<LineCodec> {
        LineCodec::new(self.markers.clone())
    }
}

/// Get the global tasksync directory location (`~/.tasksync/`).
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".tasksync"))
}

/// Resolve the config file path.
///
/// Priority:
/// 1. If `explicit_path` is provided, use it directly
/// 2. `TASKSYNC_CONFIG` environment variable
/// 3. Global location: `~/.tasksync/config.json`
#[must_use]
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    global_config_dir().map(|dir| dir.join("config.json"))
}

/// Load settings from `path`.
///
/// A missing file yields defaults.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file exists but cannot be read or
/// parsed, and [`Error::InvalidMarker`] if its marker set is invalid.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;

    let settings: Settings = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse config file: {e}")))?;

    settings.markers.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(settings)
}

/// Resolve the config path and load it, then apply environment overrides.
///
/// # Errors
///
/// Returns an error if the config file is invalid or
/// `TASKSYNC_MERGE_STRATEGY` names an unknown strategy.
pub fn resolve_settings(explicit_path: Option<&Path>) -> Result<Settings> {
    let mut settings = match resolve_config_path(explicit_path) {
        Some(path) => load_settings(&path)?,
        None => Settings::default(),
    };

    if let Ok(strategy) = std::env::var(MERGE_STRATEGY_ENV) {
        if !strategy.trim().is_empty() {
            settings.merge_strategy = strategy.parse().map_err(Error::InvalidArgument)?;
        }
    }

    Ok(settings)
}
