//! File helpers for the CLI.
//!
//! - Reading inputs, with `-` meaning stdin
//! - Atomic writes: write to temp file, sync to disk, then rename
//! - JSONL output for mapping records

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read a whole input, from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

/// A JSON document holding either one value or an array of them.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Read one value or an array of values from a JSON input.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = read_input(path)?;
    let parsed: OneOrMany<T> = serde_json::from_str(&content)?;
    Ok(match parsed {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}

/// Read exactly one JSON value.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_input(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write content to a file atomically.
///
/// This function:
/// 1. Writes content to a temporary file next to the target
/// 2. Calls `fsync` to ensure data is on disk
/// 3. Atomically renames the temp file to the target path
///
/// If any step fails, the original file (if any) remains untouched.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Serialize records as JSON lines.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn to_jsonl<T: Serialize>(records: &[T]) -> Result<String> {
    let mut content = String::new();
    for record in records {
        content.push_str(&serde_json::to_string(record)?);
        content.push('\n');
    }
    Ok(content)
}

/// Write records to a JSONL file atomically.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    atomic_write(path, &to_jsonl(records)?)
}
