//! `logbook review` commands - weekly, monthly, and yearly reviews
//!
//! Reads a manual review summary from stdin when no AI summarizer is
//! configured.

use std::io;
use std::path::Path;

use crate::cli::Cli;
use logbook_core::ai::Summarizer;
use logbook_core::error::Result;
use logbook_core::{review, Config, OutputFormat};

pub fn execute_week(cli: &Cli, config: &Config, week: u32, year: i32) -> Result<()> {
    let summarizer = config.summarizer();
    let mut input = io::stdin().lock();
    let path = review::review_week(
        config,
        week,
        year,
        summarizer.as_ref().map(|s| s as &dyn Summarizer),
        &mut input,
        cli.quiet,
    )?;
    emit(cli, "Weekly", &path)
}

pub fn execute_month(cli: &Cli, config: &Config, month: &str, year: i32) -> Result<()> {
    let summarizer = config.summarizer();
    let mut input = io::stdin().lock();
    let path = review::review_month(
        config,
        month,
        year,
        summarizer.as_ref().map(|s| s as &dyn Summarizer),
        &mut input,
        cli.quiet,
    )?;
    emit(cli, "Monthly", &path)
}

pub fn execute_year(cli: &Cli, config: &Config, year: i32) -> Result<()> {
    let summarizer = config.summarizer();
    let mut input = io::stdin().lock();
    let path = review::review_year(
        config,
        year,
        summarizer.as_ref().map(|s| s as &dyn Summarizer),
        &mut input,
        cli.quiet,
    )?;
    emit(cli, "Yearly", &path)
}

fn emit(cli: &Cli, kind: &str, path: &Path) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "kind": kind.to_lowercase(),
                "file": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} review generated at: {}", kind, path.display());
            }
        }
    }
    Ok(())
}
