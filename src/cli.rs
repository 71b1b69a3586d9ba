//! CLI argument parsing for logbook
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level,
//! --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use logbook_core::OutputFormat;

/// LogBook - daily journaling and periodic reviews
#[derive(Parser, Debug)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "LOGBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration file
    Config,

    /// Add an entry to today's journal
    Log {
        /// Entry text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        entry: Vec<String>,
    },

    /// Ensure a daily note has a summary and embed its one-line notes
    Finalize {
        /// Day to finalize as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate a review of journal entries for a period
    Review {
        #[command(subcommand)]
        period: ReviewCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// Weekly review for an ISO week
    Week {
        /// ISO week number (1-53)
        week: u32,
        /// Calendar year
        year: i32,
    },

    /// Monthly review for a named month
    Month {
        /// Full English month name, e.g. September
        month: String,
        /// Calendar year
        year: i32,
    },

    /// Yearly review
    Year {
        /// Calendar year
        year: i32,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: logbook_core::LogbookError| e.to_string())
}
