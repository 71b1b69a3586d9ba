//! AI summarizer capability.
//!
//! The summarizer is optional everywhere it appears: callers pass
//! `Option<&dyn Summarizer>` and fall back to manual input when it is
//! `None`. The shipped implementation shells out to a user-configured
//! command line.

use std::process::Command;

use crate::error::{LogbookError, Result};

/// A capability that turns journal text into a short summary.
pub trait Summarizer {
    fn generate_summary(&self, text: &str, prompt: &str) -> Result<String>;
}

/// Summarizer backed by an external command.
///
/// The configured command string is run through `sh -c` after substituting
/// the `{PROMPT}` and `{TEXT}` placeholders, e.g.
/// `gemini --prompt '{PROMPT} {TEXT}'`. The command's trimmed stdout is the
/// summary; the call blocks until the command exits.
#[derive(Debug, Clone)]
pub struct CommandSummarizer {
    command: String,
}

impl CommandSummarizer {
    pub fn new(command: impl Into<String>) -> Self {
        CommandSummarizer {
            command: command.into(),
        }
    }
}

impl Summarizer for CommandSummarizer {
    fn generate_summary(&self, text: &str, prompt: &str) -> Result<String> {
        let rendered = self
            .command
            .replace("{PROMPT}", prompt)
            .replace("{TEXT}", text);
        tracing::debug!(command = %self.command, "invoking AI summarizer");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&rendered)
            .output()
            .map_err(|e| LogbookError::Summarization {
                cause: format!("failed to run `{}`: {}", self.command, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LogbookError::Summarization {
                cause: format!(
                    "`{}` exited with {}: {}",
                    self.command,
                    output.status,
                    stderr.trim()
                ),
            });
        }

        let summary = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if summary.is_empty() {
            return Err(LogbookError::Summarization {
                cause: format!("`{}` produced no output", self.command),
            });
        }
        Ok(summary)
    }
}
