//! One-line retrospective notes.
//!
//! When a daily note is finalized, the `One-line note` section is filled
//! with the summaries of the same day 1 week, 1 month, 6 months, and 1 to
//! 3 years back. Dates without a usable summary render as `missing`.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use chrono::{Days, Months, NaiveDate};

use crate::ai::Summarizer;
use crate::config::Config;
use crate::document::{Document, LOG_LABEL, ONE_LINE_NOTE_LABEL};
use crate::error::{LogbookError, Result};
use crate::journal;
use crate::summary::{extract_summary, inject_summary};
use crate::template::{self, TemplateData};

/// Placeholder shown for dates with no note or no summary.
pub const MISSING_SUMMARY: &str = "missing";

/// Lookback dates for `target`: 1 week, 1 month, 6 months, and 1 to 3
/// years back. Offsets that fall off the calendar are skipped.
pub fn past_summary_dates(target: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = vec![target.checked_sub_days(Days::new(7))];
    for months in [1u32, 6] {
        dates.push(target.checked_sub_months(Months::new(months)));
    }
    for years in 1u32..=3 {
        dates.push(target.checked_sub_months(Months::new(years * 12)));
    }
    dates.into_iter().flatten().collect()
}

/// Collect the lookback summaries for `target`, keyed by date.
///
/// Existing files without a summary get one backfilled from the AI
/// summarizer when one is configured; manual input is never requested
/// for past notes.
pub fn past_summaries(
    config: &Config,
    target: NaiveDate,
    summarizer: Option<&dyn Summarizer>,
) -> Result<BTreeMap<NaiveDate, String>> {
    let mut summaries = BTreeMap::new();
    for date in past_summary_dates(target) {
        let path = journal::daily_file_path(config, date)?;
        summaries.insert(date, summary_or_missing(config, &path, summarizer)?);
    }
    Ok(summaries)
}

/// The summary of the note at `path`, backfilled via the summarizer if
/// the note exists without one, or [`MISSING_SUMMARY`].
fn summary_or_missing(
    config: &Config,
    path: &Path,
    summarizer: Option<&dyn Summarizer>,
) -> Result<String> {
    let doc = journal::read_document(path)?;
    if doc.is_empty() {
        return Ok(MISSING_SUMMARY.to_string());
    }
    if let Some(summary) = extract_summary(&doc) {
        return Ok(summary);
    }
    match summarizer {
        Some(ai) => backfill_summary(config, path, doc, ai),
        None => Ok(MISSING_SUMMARY.to_string()),
    }
}

/// Summarize the LOG section of an old note and store the result back
/// into the file. A failed write keeps the summary for this run and
/// leaves the file untouched.
fn backfill_summary(
    config: &Config,
    path: &Path,
    mut doc: Document,
    summarizer: &dyn Summarizer,
) -> Result<String> {
    let source = log_section_text(&doc);
    if source.is_empty() {
        return Ok(MISSING_SUMMARY.to_string());
    }
    let summary = match summarizer.generate_summary(&source, &config.ai_prompt) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "summary backfill failed");
            return Ok(MISSING_SUMMARY.to_string());
        }
    };
    inject_summary(&mut doc, &summary);
    if let Err(e) = journal::write_document(path, &doc) {
        tracing::warn!(path = %path.display(), error = %e, "could not cache backfilled summary");
    }
    Ok(summary)
}

/// Everything from below the `LOG` heading to the end of the document.
fn log_section_text(doc: &Document) -> String {
    match doc.find_heading(LOG_LABEL) {
        Some(line) => doc.lines()[line + 1..].join("\n").trim().to_string(),
        None => String::new(),
    }
}

/// Replace the body of the `One-line note` section with one rendered
/// line per lookback date, most recent first.
pub fn embed_one_line_notes(
    config: &Config,
    doc: &mut Document,
    summaries: &BTreeMap<NaiveDate, String>,
    path: &Path,
) -> Result<()> {
    let heading = doc
        .find_heading(ONE_LINE_NOTE_LABEL)
        .ok_or_else(|| LogbookError::SectionNotFound {
            section: ONE_LINE_NOTE_LABEL.to_string(),
            path: path.to_path_buf(),
        })?;
    let start = heading + 1;
    let end = doc.next_heading_line(start);

    let mut rendered = Vec::with_capacity(summaries.len() + 1);
    for (date, summary) in summaries.iter().rev() {
        rendered.push(template::render(
            &config.one_line_template,
            &TemplateData {
                date: Some(*date),
                summary: Some(summary),
                ..Default::default()
            },
        )?);
    }
    rendered.push(String::new());

    doc.splice_lines(start, end, rendered);
    Ok(())
}

/// Finalize the daily note at `path`: ensure it carries a summary, then
/// embed the lookback one-line notes for `date`.
pub fn finalize_daily_file(
    config: &Config,
    date: NaiveDate,
    path: &Path,
    summarizer: Option<&dyn Summarizer>,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<()> {
    journal::generate_summary_if_missing(path, summarizer, &config.ai_prompt, input, quiet)?;

    let summaries = past_summaries(config, date, summarizer)?;
    let mut doc = journal::read_document(path)?;
    embed_one_line_notes(config, &mut doc, &summaries, path)?;
    journal::write_document(path, &doc)?;
    tracing::info!(path = %path.display(), "finalized daily journal file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result as CoreResult;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    struct FixedSummarizer(&'static str);

    impl Summarizer for FixedSummarizer {
        fn generate_summary(&self, _text: &str, _prompt: &str) -> CoreResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_config(journal_dir: &Path) -> Config {
        Config {
            journal_dir: journal_dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn lookback_covers_week_months_and_years() {
        let dates = past_summary_dates(date(2025, 9, 15));
        assert_eq!(
            dates,
            vec![
                date(2025, 9, 8),
                date(2025, 8, 15),
                date(2025, 3, 15),
                date(2024, 9, 15),
                date(2023, 9, 15),
                date(2022, 9, 15),
            ]
        );
    }

    #[test]
    fn month_offsets_clamp_to_month_end() {
        let dates = past_summary_dates(date(2025, 3, 31));
        assert!(dates.contains(&date(2025, 2, 28)));
    }

    #[test]
    fn missing_notes_map_to_the_placeholder() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let summaries = past_summaries(&config, date(2025, 9, 15), None).unwrap();
        assert_eq!(summaries.len(), 6);
        assert!(summaries.values().all(|s| s == MISSING_SUMMARY));
    }

    #[test]
    fn existing_summary_wins_over_backfill() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(
            dir.path().join("2025-09-08.md"),
            "# Sep 08 2025 Monday\nAlready summarized.\n\n# LOG\n09:00 worked\n",
        )
        .unwrap();

        let ai = FixedSummarizer("generated");
        let summaries = past_summaries(&config, date(2025, 9, 15), Some(&ai)).unwrap();
        assert_eq!(summaries[&date(2025, 9, 8)], "Already summarized.");
    }

    #[test]
    fn backfilled_summary_is_cached_in_the_file() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let path = dir.path().join("2025-09-08.md");
        fs::write(&path, "# Sep 08 2025 Monday\n\n# LOG\n09:00 worked\n").unwrap();

        let ai = FixedSummarizer("Caught up on work.");
        let summaries = past_summaries(&config, date(2025, 9, 15), Some(&ai)).unwrap();
        assert_eq!(summaries[&date(2025, 9, 8)], "Caught up on work.");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Caught up on work.\n"));
    }

    #[test]
    fn note_without_log_content_stays_missing() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(
            dir.path().join("2025-09-08.md"),
            "# Sep 08 2025 Monday\n\n# LOG\n",
        )
        .unwrap();

        let ai = FixedSummarizer("never used");
        let summaries = past_summaries(&config, date(2025, 9, 15), Some(&ai)).unwrap();
        assert_eq!(summaries[&date(2025, 9, 8)], MISSING_SUMMARY);
    }

    #[test]
    fn embed_renders_most_recent_first() {
        let config = test_config(Path::new("/journal"));
        let mut doc = Document::parse("# Title\n\n# One-line note\n\n# LOG\n");
        let mut summaries = BTreeMap::new();
        summaries.insert(date(2024, 9, 15), "a year ago".to_string());
        summaries.insert(date(2025, 9, 8), "last week".to_string());

        embed_one_line_notes(&config, &mut doc, &summaries, Path::new("t.md")).unwrap();
        assert_eq!(
            doc.serialize(),
            "# Title\n\n# One-line note\n* [[2025-09-08]]: last week\n* [[2024-09-15]]: a year ago\n\n# LOG\n"
        );
    }

    #[test]
    fn embed_replaces_previous_notes() {
        let config = test_config(Path::new("/journal"));
        let mut doc =
            Document::parse("# Title\n\n# One-line note\n* [[2020-01-01]]: stale\n\n# LOG\n");
        let mut summaries = BTreeMap::new();
        summaries.insert(date(2025, 9, 8), "fresh".to_string());

        embed_one_line_notes(&config, &mut doc, &summaries, Path::new("t.md")).unwrap();
        let out = doc.serialize();
        assert!(out.contains("* [[2025-09-08]]: fresh\n"));
        assert!(!out.contains("stale"));
    }

    #[test]
    fn embed_without_the_section_fails() {
        let config = test_config(Path::new("/journal"));
        let mut doc = Document::parse("# Title\n\n# LOG\n");
        let err = embed_one_line_notes(&config, &mut doc, &BTreeMap::new(), Path::new("t.md"))
            .unwrap_err();
        assert!(matches!(err, LogbookError::SectionNotFound { .. }));
    }

    #[test]
    fn finalize_injects_summary_and_notes() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        let day = date(2025, 9, 15);
        let (path, _) = journal::create_daily_file(&config, day).unwrap();
        let ts = day.and_hms_opt(9, 0, 0).unwrap();
        journal::append_entry(&config, &path, "shipped the release", ts).unwrap();

        finalize_daily_file(
            &config,
            day,
            &path,
            None,
            &mut Cursor::new("Release day.\n"),
            false,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Release day.\n"));
        assert!(content.contains("* [[2025-09-08]]: missing\n"));
        assert!(content.contains("09:00 shipped the release\n"));
    }
}
