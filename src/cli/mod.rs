//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::sync::MergeStrategy;

/// Output format for list/query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;
pub mod file;

/// tasksync - markdown checkbox tasks to Todoist and Things, and back
#[derive(Parser, Debug)]
#[command(name = "tasksync", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: ~/.tasksync/config.json)
    #[arg(long, global = true, env = "TASKSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Print rewritten files instead of writing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tasks in a markdown file
    Parse(ParseArgs),

    /// Encode task JSON as markdown task lines
    Format {
        /// JSON file holding a task or an array of tasks (`-` for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Rewrite one task line of a markdown file
    Update {
        /// Markdown file to rewrite
        file: PathBuf,

        /// 1-based line number
        #[arg(long)]
        line: usize,

        /// JSON file holding the new task (`-` for stdin)
        #[arg(long, default_value = "-")]
        task: PathBuf,
    },

    /// Convert the tasks in a markdown file for an external tracker
    Export {
        /// Markdown file to read
        file: PathBuf,

        /// Tracker schema to produce
        #[arg(long, value_enum)]
        target: Tracker,
    },

    /// Convert external tracker tasks into markdown tasks
    Import(ImportArgs),

    /// Build identity mapping records for the tasks in a markdown file
    Map {
        /// Markdown file to read
        file: PathBuf,

        /// Write JSONL here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Merge a remote task patch into a local task
    Merge {
        /// JSON file holding the local task
        #[arg(long)]
        local: PathBuf,

        /// JSON file holding the remote (partial) task
        #[arg(long)]
        remote: PathBuf,

        /// Resolution strategy (default from config, then `merge`)
        #[arg(long, value_enum)]
        strategy: Option<MergeStrategy>,
    },

    /// Parse a recurrence phrase
    Recur {
        /// The phrase, e.g. `every 2 weeks on monday`
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// External task trackers.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracker {
    /// Todoist (cloud)
    Todoist,
    /// Things (inbox)
    Things,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Markdown file to read
    pub file: PathBuf,

    /// Only tasks with this tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Only tasks with this status name (repeatable)
    #[arg(long = "status")]
    pub statuses: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file holding one external task or an array of them (`-` for stdin)
    pub input: PathBuf,

    /// Tracker schema of the input
    #[arg(long, value_enum)]
    pub source: Tracker,

    /// Markdown file the task will live in
    #[arg(long, requires = "line")]
    pub path: Option<String>,

    /// Line the task will live on
    #[arg(long, requires = "path")]
    pub line: Option<usize>,
}
