//! Daily journal file lifecycle.
//!
//! Every operation reads the whole file, mutates the in-memory document,
//! and rewrites the whole file. There is no locking and no caching; two
//! reads of the same path are independent snapshots.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::ai::Summarizer;
use crate::config::Config;
use crate::document::{Document, RegionKind, LOG_LABEL};
use crate::error::{LogbookError, Result};
use crate::period::Period;
use crate::summary::{ensure_summary, extract_summary};
use crate::template::{self, TemplateData};

/// Render the daily file name for a date.
pub fn daily_file_name(config: &Config, date: NaiveDate) -> Result<String> {
    template::render(
        &config.daily_file_name,
        &TemplateData {
            date: Some(date),
            ..Default::default()
        },
    )
}

/// Absolute path of the daily file for a date.
pub fn daily_file_path(config: &Config, date: NaiveDate) -> Result<PathBuf> {
    Ok(config.journal_dir.join(daily_file_name(config, date)?))
}

/// Create the daily journal file for `date` from the configured template,
/// or return the existing one. The boolean is `true` when the file was
/// created by this call.
pub fn create_daily_file(config: &Config, date: NaiveDate) -> Result<(PathBuf, bool)> {
    config.validate()?;
    fs::create_dir_all(&config.journal_dir).map_err(|source| LogbookError::FileWrite {
        path: config.journal_dir.clone(),
        source,
    })?;

    let path = daily_file_path(config, date)?;
    if path.exists() {
        return Ok((path, false));
    }

    let content = template::render(
        &config.daily_template,
        &TemplateData {
            date: Some(date),
            ..Default::default()
        },
    )?;
    fs::write(&path, content).map_err(|source| LogbookError::FileWrite {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "created daily journal file");
    Ok((path, true))
}

/// Read a document snapshot. A nonexistent file is the empty sentinel,
/// not an error.
pub fn read_document(path: &Path) -> Result<Document> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Document::parse(&raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Document::default()),
        Err(source) => Err(LogbookError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Rewrite the file with the document's full serialized content.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, doc.serialize()).map_err(|source| LogbookError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Render and append one LOG entry to the daily file at `path`.
///
/// Entries accumulate in arrival order directly under the `LOG` heading;
/// there is no reordering or timestamp-based sort.
pub fn append_entry(
    config: &Config,
    path: &Path,
    entry: &str,
    timestamp: NaiveDateTime,
) -> Result<()> {
    let mut doc = read_document(path)?;
    let line = template::render(
        &config.log_entry_template,
        &TemplateData {
            time: Some(timestamp),
            entry: Some(entry),
            ..Default::default()
        },
    )?;
    let index = doc
        .log_insertion_index()
        .ok_or_else(|| LogbookError::SectionNotFound {
            section: LOG_LABEL.to_string(),
            path: path.to_path_buf(),
        })?;
    doc.insert_line(index, line);
    write_document(path, &doc)?;
    tracing::debug!(path = %path.display(), "appended log entry");
    Ok(())
}

/// Generate and store a summary for the daily file if it has none.
///
/// The summarizer input is the document body after the title, with the
/// `One-line note` region excised. Without a summarizer, one line is read
/// from `input`; a blank line skips. No-op for nonexistent files.
pub fn generate_summary_if_missing(
    path: &Path,
    summarizer: Option<&dyn Summarizer>,
    prompt: &str,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<()> {
    let mut doc = read_document(path)?;
    if doc.is_empty() {
        return Ok(());
    }
    let source = summary_source_text(&doc);
    if ensure_summary(&mut doc, &source, prompt, summarizer, input, quiet)? {
        write_document(path, &doc)?;
    }
    Ok(())
}

/// The text handed to the summarizer for a daily note: everything after
/// the title, excluding the `One-line note` region. The region sits ahead
/// of `LOG` in the default template, so only its own span is excised,
/// never the rest of the body.
fn summary_source_text(doc: &Document) -> String {
    let one_line = doc
        .sections()
        .into_iter()
        .find(|r| r.kind == RegionKind::OneLineNote);
    doc.lines()
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(i, _)| !one_line.is_some_and(|r| r.start <= *i && *i < r.end))
        .map(|(_, line)| line.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Candidate daily file for every day of the period, in chronological
/// order, without checking existence.
pub fn daily_paths(config: &Config, period: &Period) -> Result<Vec<(NaiveDate, PathBuf)>> {
    period
        .days()
        .map(|date| daily_file_path(config, date).map(|path| (date, path)))
        .collect()
}

/// Extract the summary of the daily file at `path`; `None` when the file
/// does not exist or has no summary.
pub fn extract_summary_from_file(path: &Path) -> Result<Option<String>> {
    Ok(extract_summary(&read_document(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::week_range;
    use std::cell::RefCell;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn test_config(journal_dir: &Path) -> Config {
        Config {
            journal_dir: journal_dir.to_path_buf(),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_daily_file_renders_the_template() {
        let dir = tempdir().unwrap();
        let config = test_config(&dir.path().join("journal"));
        let day = date(2025, 9, 15);

        let (path, created) = create_daily_file(&config, day).unwrap();
        assert!(created);
        assert_eq!(path.file_name().unwrap(), "2025-09-15.md");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Sep 15 2025 Monday\n"));
        assert!(content.contains("# One-line note\n"));
        assert!(content.contains("# LOG\n"));

        let (again, created) = create_daily_file(&config, day).unwrap();
        assert!(!created);
        assert_eq!(again, path);
    }

    #[test]
    fn create_daily_file_rejects_relative_journal_dir() {
        let config = test_config(Path::new("relative/journal"));
        let err = create_daily_file(&config, date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, LogbookError::InvalidConfig { .. }));
    }

    #[test]
    fn entries_accumulate_in_arrival_order() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let day = date(2025, 9, 15);
        let (path, _) = create_daily_file(&config, day).unwrap();

        for (minute, text) in [(0, "first"), (5, "second"), (10, "third")] {
            let ts = day.and_hms_opt(9, minute, 0).unwrap();
            append_entry(&config, &path, text, ts).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let log_at = content.find("# LOG").unwrap();
        let log_section = &content[log_at..];
        assert!(log_section.contains("09:00 first\n09:05 second\n09:10 third\n"));
        assert!(content.ends_with('\n'));
        assert!(!content.ends_with("\n\n"));
    }

    #[test]
    fn append_entry_without_log_section_fails() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Title\nno log here\n").unwrap();

        let ts = date(2025, 9, 15).and_hms_opt(9, 0, 0).unwrap();
        let err = append_entry(&config, &path, "entry", ts).unwrap_err();
        assert!(matches!(err, LogbookError::SectionNotFound { .. }));
    }

    #[test]
    fn manual_summary_is_injected_once() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let (path, _) = create_daily_file(&config, date(2025, 9, 15)).unwrap();

        generate_summary_if_missing(
            &path,
            None,
            &config.ai_prompt,
            &mut Cursor::new("Hand-written summary\n"),
            false,
        )
        .unwrap();
        assert_eq!(
            extract_summary_from_file(&path).unwrap().as_deref(),
            Some("Hand-written summary")
        );

        // Second run is gated on the existing summary; the input stream is
        // not consumed
        let mut untouched = Cursor::new("would duplicate\n");
        generate_summary_if_missing(&path, None, &config.ai_prompt, &mut untouched, false)
            .unwrap();
        assert_eq!(untouched.position(), 0);
        assert_eq!(
            extract_summary_from_file(&path).unwrap().as_deref(),
            Some("Hand-written summary")
        );
    }

    #[test]
    fn summary_source_excludes_title_and_one_line_section() {
        let doc = Document::parse(
            "# Title\n\n# LOG\n09:00 worked\n\n# One-line note\n* [[2024-01-01]]: old\n",
        );
        let source = summary_source_text(&doc);
        assert!(source.contains("09:00 worked"));
        assert!(!source.contains("Title"));
        assert!(!source.contains("old"));

        // Default template order: One-line note sits ahead of LOG. The
        // LOG entries must survive the excision.
        let doc = Document::parse(
            "# Title\n<!-- hint -->\n\n# One-line note\n* [[2024-01-01]]: old\n\n# LOG\n09:00 worked\n",
        );
        let source = summary_source_text(&doc);
        assert!(source.contains("09:00 worked"));
        assert!(!source.contains("old"));
        assert!(!source.contains("One-line note"));
    }

    #[test]
    fn summarizer_input_includes_log_entries_for_a_default_note() {
        struct RecordingSummarizer(RefCell<String>);

        impl Summarizer for RecordingSummarizer {
            fn generate_summary(&self, text: &str, _prompt: &str) -> Result<String> {
                *self.0.borrow_mut() = text.to_string();
                Ok("Summarized the day.".to_string())
            }
        }

        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let day = date(2025, 9, 15);
        let (path, _) = create_daily_file(&config, day).unwrap();
        let ts = day.and_hms_opt(9, 0, 0).unwrap();
        append_entry(&config, &path, "wrote the parser", ts).unwrap();

        let recorder = RecordingSummarizer(RefCell::new(String::new()));
        generate_summary_if_missing(
            &path,
            Some(&recorder),
            &config.ai_prompt,
            &mut Cursor::new(""),
            false,
        )
        .unwrap();

        let seen = recorder.0.borrow();
        assert!(seen.contains("09:00 wrote the parser"));
        assert!(!seen.contains("One-line note"));
        assert!(!seen.contains("Sep 15 2025"));
        assert_eq!(
            extract_summary_from_file(&path).unwrap().as_deref(),
            Some("Summarized the day.")
        );
    }

    #[test]
    fn daily_paths_cover_the_whole_period_without_existence_checks() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let period = week_range(38, 2025).unwrap();

        let paths = daily_paths(&config, &period).unwrap();
        assert_eq!(paths.len(), 7);
        assert_eq!(paths[0].0, date(2025, 9, 15));
        assert_eq!(paths[6].0, date(2025, 9, 21));
        assert_eq!(paths[0].1.file_name().unwrap(), "2025-09-15.md");
        assert!(paths.iter().all(|(_, p)| !p.exists()));
    }

    #[test]
    fn reading_a_missing_file_yields_the_empty_sentinel() {
        let doc = read_document(Path::new("/nonexistent/2025-01-01.md")).unwrap();
        assert!(doc.is_empty());
    }
}
