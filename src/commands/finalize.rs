//! `logbook finalize` command - summary plus one-line notes for a day
//!
//! Reads a manual summary from stdin when no AI summarizer is configured.

use std::io;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::cli::Cli;
use logbook_core::ai::Summarizer;
use logbook_core::error::{LogbookError, Result};
use logbook_core::{journal, oneline, Config, OutputFormat};

pub fn execute(cli: &Cli, config: &Config, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| LogbookError::UsageError(format!("invalid date {raw:?}: {e}")))?,
        None => Local::now().date_naive(),
    };

    let path = journal::daily_file_path(config, date)?;
    if !path.exists() {
        return Err(LogbookError::FileRead {
            path,
            source: io::Error::new(io::ErrorKind::NotFound, "no journal file for this date"),
        });
    }

    let summarizer = config.summarizer();
    let mut input = io::stdin().lock();
    oneline::finalize_daily_file(
        config,
        date,
        &path,
        summarizer.as_ref().map(|s| s as &dyn Summarizer),
        &mut input,
        cli.quiet,
    )?;

    emit(cli, &path)
}

fn emit(cli: &Cli, path: &Path) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "file": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Finalized daily journal file: {}", path.display());
            }
        }
    }
    Ok(())
}
