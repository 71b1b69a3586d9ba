//! Summary extraction and injection.
//!
//! The summary is the first paragraph of a document: the span of non-empty,
//! non-heading, non-comment lines between the title and the next boundary.
//! It stands in for the whole document in reviews and one-line notes.

use std::io::{BufRead, Write};

use crate::ai::Summarizer;
use crate::document::Document;
use crate::error::{LogbookError, Result};

/// Extract the first-paragraph summary of a document.
///
/// Returns `None` when the document has no summary: empty sentinel, nothing
/// but headings, or a `LOG` / `One-line note` section reached before any
/// content. Captured lines are trimmed and joined with single spaces;
/// multi-paragraph summaries are not supported.
pub fn extract_summary(doc: &Document) -> Option<String> {
    let region = doc
        .sections()
        .into_iter()
        .find(|r| r.kind == crate::document::RegionKind::Summary)?;
    let text = doc.lines()[region.start..region.end]
        .iter()
        .map(|line| line.trim())
        .filter(|t| !t.is_empty() && !t.starts_with("<!--"))
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Insert `text` as the document's summary, immediately after the title and
/// an optional line-1 HTML comment, followed by exactly one blank line.
///
/// This operation is NOT idempotent: calling it on a document that already
/// has a summary inserts a second paragraph ahead of the first. Callers
/// must gate on [`extract_summary`] (see [`ensure_summary`]).
pub fn inject_summary(doc: &mut Document, text: &str) {
    let lines = doc.lines();
    if lines.is_empty() {
        *doc = Document::from_lines(vec![text.trim().to_string(), String::new()]);
        return;
    }
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(lines[0].clone());
    let mut rest = 1;
    if lines.len() > 1 && lines[1].trim().starts_with("<!--") {
        out.push(lines[1].clone());
        rest = 2;
    }
    out.push(text.trim().to_string());
    out.push(String::new());
    while rest < lines.len() && lines[rest].trim().is_empty() {
        rest += 1;
    }
    out.extend(lines[rest..].iter().cloned());
    *doc = Document::from_lines(out);
}

/// Generate and inject a summary if the document has none.
///
/// With a summarizer, `source_text` and `prompt` are handed to it; without
/// one, a single line is read from `input` (a blank or whitespace-only line
/// means "skip"). The interactive prompt goes to stderr, keeping stdout
/// machine-readable, and is suppressed when `quiet` is set. Returns `true`
/// when a summary was injected.
pub fn ensure_summary(
    doc: &mut Document,
    source_text: &str,
    prompt: &str,
    summarizer: Option<&dyn Summarizer>,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<bool> {
    if extract_summary(doc).is_some() {
        return Ok(false);
    }

    let text = match summarizer {
        Some(summarizer) => summarizer.generate_summary(source_text, prompt)?,
        None => read_manual_summary(input, quiet)?,
    };

    if text.trim().is_empty() {
        tracing::debug!("summary skipped");
        return Ok(false);
    }
    inject_summary(doc, &text);
    Ok(true)
}

fn read_manual_summary(input: &mut dyn BufRead, quiet: bool) -> Result<String> {
    if !quiet {
        eprint!("No AI summarizer configured. Enter a manual summary (or leave blank to skip): ");
        let _ = std::io::stderr().flush();
    }
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| LogbookError::ManualSummaryRead {
            cause: e.to_string(),
        })?;
    Ok(line)
}
