//! Command dispatch logic for logbook

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands, ReviewCommands};
use crate::commands;
use logbook_core::error::{LogbookError, Result};
use logbook_core::Config;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config_path = config_path(cli)?;

    if cli.verbose {
        eprintln!("resolve_config: {:?}", start.elapsed());
    }

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Config) => commands::config::execute(cli, &config_path),

        Some(Commands::Log { entry }) => {
            let config = Config::load(&config_path)?;
            commands::log::execute(cli, &config, entry, start)
        }

        Some(Commands::Finalize { date }) => {
            let config = Config::load(&config_path)?;
            commands::finalize::execute(cli, &config, date.as_deref())
        }

        Some(Commands::Review { period }) => {
            let config = Config::load(&config_path)?;
            match period {
                ReviewCommands::Week { week, year } => {
                    commands::review::execute_week(cli, &config, *week, *year)
                }
                ReviewCommands::Month { month, year } => {
                    commands::review::execute_month(cli, &config, month, *year)
                }
                ReviewCommands::Year { year } => {
                    commands::review::execute_year(cli, &config, *year)
                }
            }
        }
    }
}

/// The configuration file location: `--config` / `LOGBOOK_CONFIG`, or the
/// platform config directory.
fn config_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = cli.config.as_ref() {
        return Ok(path.clone());
    }
    Config::default_path().ok_or_else(|| {
        LogbookError::Other("could not determine the configuration directory".to_string())
    })
}

fn handle_no_command() -> Result<()> {
    println!("logbook {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A daily journaling and periodic review CLI.");
    println!();
    println!("Run `logbook --help` for usage information.");
    Ok(())
}
