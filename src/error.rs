//! Error types for tasksync.
//!
//! The pure core (codec, converters, merge) has no failure paths; these
//! errors come from configuration and from the CLI's file handling.
//!
//! Provides:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (4=validation, 7=config, 8=io, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use thiserror::Error;

/// Result type alias for tasksync operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (exit 4)
    InvalidArgument,
    NotATask,
    LineOutOfRange,

    // Config (exit 7)
    ConfigError,
    InvalidMarker,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotATask => "NOT_A_TASK",
            Self::LineOutOfRange => "LINE_OUT_OF_RANGE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InvalidMarker => "INVALID_MARKER",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::InvalidArgument | Self::NotATask | Self::LineOutOfRange => 4,
            Self::ConfigError | Self::InvalidMarker => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether a retry with corrected input can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::NotATask | Self::LineOutOfRange | Self::JsonError
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in tasksync operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Line {line} of {path} is not a task")]
    NotATask { path: String, line: usize },

    #[error("Line {line} is outside {path} ({total} lines)")]
    LineOutOfRange {
        path: String,
        line: usize,
        total: usize,
    },

    #[error("Invalid marker configuration: {0}")]
    InvalidMarker(String),

    #[error("Invalid marker pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotATask { .. } => ErrorCode::NotATask,
            Self::LineOutOfRange { .. } => ErrorCode::LineOutOfRange,
            Self::InvalidMarker(_) | Self::Regex(_) => ErrorCode::InvalidMarker,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotATask { path, .. } => Some(format!(
                "Task lines look like `- [ ] Title`. Use `tasksync parse {path}` to list task lines."
            )),

            Self::LineOutOfRange { total, .. } => {
                Some(format!("Line numbers start at 1 and must be at most {total}."))
            }

            Self::InvalidMarker(_) | Self::Regex(_) => Some(
                "Check the `markers` block of your config file; every marker must be non-empty."
                    .to_string(),
            ),

            Self::Config(_) => Some(
                "Fix or remove the config file (see --config / TASKSYNC_CONFIG).".to_string(),
            ),

            Self::InvalidArgument(msg) => {
                if msg.contains("strategy") {
                    Some("Valid strategies: local_wins, remote_wins, merge".to_string())
                } else {
                    None
                }
            }

            Self::Io(_) | Self::Json(_) | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
