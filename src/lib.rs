//! tasksync - markdown checkbox tasks ↔ Todoist and Things
//!
//! This crate provides the task line engine behind the `tasksync` CLI.
//!
//! # Architecture
//!
//! - [`markdown`] - Line codec, document scanner, recurrence parser
//! - [`sync`] - Fingerprints, identity mappings, schema converters, merge
//! - [`model`] - Data types (Task, TaskPatch, Recurrence, TaskMapping, external schemas)
//! - [`config`] - Configuration management
//! - [`cli`] - Command-line interface using clap
//! - [`error`] - Error types and handling
//!
//! `markdown` and `sync` are pure: all file access lives in `cli`.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod sync;

pub use error::{Error, Result};

/// Global dry-run flag for `--dry-run`.
///
/// When set, commands that rewrite files print the result instead.
pub static DRY_RUN: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Global CSV output flag (set when `--format csv`).
pub static CSV_OUTPUT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if dry-run mode is active.
#[inline]
pub fn is_dry_run() -> bool {
    DRY_RUN.load(std::sync::atomic::Ordering::Relaxed)
}

/// Check if CSV output is requested.
#[inline]
pub fn is_csv() -> bool {
    CSV_OUTPUT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Escape a value for CSV output (wrap in quotes if it contains commas, quotes, or newlines).
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
