//! `logbook log` command - append an entry to today's journal
//!
//! Creates the daily note from the configured template on first use.

use std::time::Instant;

use chrono::Local;

use crate::cli::Cli;
use logbook_core::error::Result;
use logbook_core::{journal, Config, OutputFormat};

pub fn execute(cli: &Cli, config: &Config, entry: &[String], start: Instant) -> Result<()> {
    let entry = entry.join(" ");
    let now = Local::now().naive_local();

    let (path, created) = journal::create_daily_file(config, now.date())?;
    journal::append_entry(config, &path, &entry, now)?;

    if cli.verbose {
        eprintln!("append_entry: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "file": path.display().to_string(),
                "created": created,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                if created {
                    println!("Created daily journal file: {}", path.display());
                }
                println!("Entry added to log.");
            }
        }
    }
    Ok(())
}
