//! Core journaling engine for the `logbook` CLI.
//!
//! Daily notes are plain markdown files in a single journal directory,
//! created from a configurable template. Entries accumulate under a `LOG`
//! heading, the first paragraph after the title doubles as the note's
//! summary, and reviews aggregate those summaries over ISO weeks, months,
//! and years.

pub mod ai;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod journal;
pub mod logging;
pub mod oneline;
pub mod period;
pub mod review;
pub mod summary;
pub mod template;

pub use config::Config;
pub use error::{ExitCode, LogbookError, Result};
pub use format::OutputFormat;
