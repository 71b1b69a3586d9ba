//! Application configuration.
//!
//! Configuration is stored in `~/.config/logbook/config.toml`. Every field
//! has a default, so a partial file is fine; an absent file is not (run
//! `logbook config` first).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai::CommandSummarizer;
use crate::error::{LogbookError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one markdown file per calendar day. Must be
    /// absolute.
    #[serde(default = "default_journal_dir")]
    pub journal_dir: PathBuf,

    /// Template for daily file names
    #[serde(default = "default_daily_file_name")]
    pub daily_file_name: String,

    /// Template for the skeleton of a new daily file
    #[serde(default = "default_daily_template")]
    pub daily_template: String,

    /// Template for one rendered LOG entry line
    #[serde(default = "default_log_entry_template")]
    pub log_entry_template: String,

    /// Whether the external AI summarizer is used
    #[serde(default)]
    pub ai_enabled: bool,

    /// Command line run through `sh -c` with `{PROMPT}` and `{TEXT}`
    /// substituted, e.g. `gemini --prompt '{PROMPT} {TEXT}'`
    #[serde(default)]
    pub ai_command: String,

    /// Prompt handed to the summarizer for daily notes
    #[serde(default = "default_ai_prompt")]
    pub ai_prompt: String,

    /// Template for one embedded one-line note
    #[serde(default = "default_one_line_template")]
    pub one_line_template: String,
}

impl Config {
    /// Default configuration file location
    /// (`~/.config/logbook/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logbook").join("config.toml"))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LogbookError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LogbookError::Other(format!("failed to serialize config: {e}")))?;
        fs::write(path, content).map_err(|source| LogbookError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(invalid("journal_dir cannot be empty"));
        }
        if !self.journal_dir.is_absolute() {
            return Err(invalid("journal_dir must be an absolute path"));
        }
        if self.daily_file_name.is_empty() {
            return Err(invalid("daily_file_name cannot be empty"));
        }
        if self.daily_template.is_empty() {
            return Err(invalid("daily_template cannot be empty"));
        }
        if self.log_entry_template.is_empty() {
            return Err(invalid("log_entry_template cannot be empty"));
        }
        if self.ai_enabled && self.ai_command.is_empty() {
            return Err(invalid("ai_command cannot be empty if AI is enabled"));
        }
        if self.ai_enabled && self.ai_prompt.is_empty() {
            return Err(invalid("ai_prompt cannot be empty if AI is enabled"));
        }
        Ok(())
    }

    /// The configured summarizer capability, if AI is enabled.
    pub fn summarizer(&self) -> Option<CommandSummarizer> {
        self.ai_enabled
            .then(|| CommandSummarizer::new(self.ai_command.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: default_journal_dir(),
            daily_file_name: default_daily_file_name(),
            daily_template: default_daily_template(),
            log_entry_template: default_log_entry_template(),
            ai_enabled: false,
            ai_command: String::new(),
            ai_prompt: default_ai_prompt(),
            one_line_template: default_one_line_template(),
        }
    }
}

fn invalid(reason: &str) -> LogbookError {
    LogbookError::InvalidConfig {
        reason: reason.to_string(),
    }
}

fn default_journal_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".logbook")
        .join("journal")
}

fn default_daily_file_name() -> String {
    "{date:%Y-%m-%d}.md".to_string()
}

fn default_daily_template() -> String {
    "# {date:%b %d %Y %A}\n\
     <!-- add today summary below this line. If missing, the AI will generate one for you according to configuration file -->\n\
     \n\
     # One-line note\n\
     \n\
     # LOG\n\
     \n"
    .to_string()
}

fn default_log_entry_template() -> String {
    "{time:%H:%M} {entry}".to_string()
}

fn default_ai_prompt() -> String {
    "Write a summary of the note at the given file. Use 1st person and a simple language. Use 200 characters or less"
        .to_string()
}

fn default_one_line_template() -> String {
    "* [[{date:%Y-%m-%d}]]: {summary}".to_string()
}
