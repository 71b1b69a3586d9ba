//! `logbook config` command - create a default configuration file
//!
//! Idempotent: an existing file is reported and left untouched.

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use logbook_core::error::{LogbookError, Result};
use logbook_core::{Config, OutputFormat};

pub fn execute(cli: &Cli, path: &Path) -> Result<()> {
    if path.exists() {
        emit(cli, path, false)?;
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| LogbookError::FileWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Config::default().save(path)?;
    emit(cli, path, true)
}

fn emit(cli: &Cli, path: &Path, created: bool) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "config": path.display().to_string(),
                "created": created,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if created {
                println!("Default configuration file created at: {}", path.display());
            } else {
                println!("Configuration file already exists at: {}", path.display());
            }
        }
    }
    Ok(())
}
