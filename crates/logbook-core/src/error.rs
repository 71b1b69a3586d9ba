//! Error types and exit codes for logbook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed journal file, bad config, template error)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the logbook binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed journal file, bad config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during logbook operations
#[derive(Error, Debug)]
pub enum LogbookError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid month name: {0}")]
    InvalidMonth(String),

    #[error("invalid ISO week number: {0}")]
    InvalidWeek(u32),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("\"{section}\" section not found in {path:?}")]
    SectionNotFound { section: String, path: PathBuf },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("template error: {reason}")]
    Template { reason: String },

    // Generic failures (exit code 1)
    #[error("failed to generate summary: {cause}")]
    Summarization { cause: String },

    #[error("failed to read manual summary: {cause}")]
    ManualSummaryRead { cause: String },

    #[error("failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl LogbookError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            LogbookError::UnknownFormat(_)
            | LogbookError::InvalidMonth(_)
            | LogbookError::InvalidWeek(_)
            | LogbookError::UsageError(_) => ExitCode::Usage,

            // Data errors
            LogbookError::SectionNotFound { .. }
            | LogbookError::InvalidConfig { .. }
            | LogbookError::Template { .. } => ExitCode::Data,

            // Generic failures
            LogbookError::Summarization { .. }
            | LogbookError::ManualSummaryRead { .. }
            | LogbookError::FileRead { .. }
            | LogbookError::FileWrite { .. }
            | LogbookError::Io(_)
            | LogbookError::Toml(_)
            | LogbookError::Json(_)
            | LogbookError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LogbookError::UnknownFormat(_) => "unknown_format",
            LogbookError::InvalidMonth(_) => "invalid_month",
            LogbookError::InvalidWeek(_) => "invalid_week",
            LogbookError::UsageError(_) => "usage_error",
            LogbookError::SectionNotFound { .. } => "section_not_found",
            LogbookError::InvalidConfig { .. } => "invalid_config",
            LogbookError::Template { .. } => "template_error",
            LogbookError::Summarization { .. } => "summarization_failed",
            LogbookError::ManualSummaryRead { .. } => "manual_summary_read_failed",
            LogbookError::FileRead { .. } => "file_read_error",
            LogbookError::FileWrite { .. } => "file_write_error",
            LogbookError::Io(_) => "io_error",
            LogbookError::Toml(_) => "toml_error",
            LogbookError::Json(_) => "json_error",
            LogbookError::Other(_) => "other",
        }
    }
}

/// Result type alias for logbook operations
pub type Result<T> = std::result::Result<T, LogbookError>;
