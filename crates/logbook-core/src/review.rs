//! Weekly, monthly, and yearly review files.
//!
//! A review is built fully in memory and written once: title, review
//! summary (AI or manual), then the per-day summaries collected from the
//! daily notes of the period. Days without a daily file are skipped.

use std::io::BufRead;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::ai::Summarizer;
use crate::config::Config;
use crate::document::Document;
use crate::error::{LogbookError, Result};
use crate::journal;
use crate::period::{self, Period, PeriodKind};
use crate::summary::ensure_summary;

/// Generate the weekly review file for an ISO week. Returns its path.
pub fn review_week(
    config: &Config,
    week: u32,
    year: i32,
    summarizer: Option<&dyn Summarizer>,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<PathBuf> {
    let period = period::week_range(week, year)?;
    build_review(
        config,
        &period,
        format!("review_week_{year}_{week}.md"),
        format!("# Weekly Review - Week {week}, {year}"),
        summarizer,
        input,
        quiet,
    )
}

/// Generate the monthly review file for a named month. Returns its path.
pub fn review_month(
    config: &Config,
    month: &str,
    year: i32,
    summarizer: Option<&dyn Summarizer>,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<PathBuf> {
    let period = period::month_range(month, year)?;
    build_review(
        config,
        &period,
        format!("review_month_{month}_{year}.md"),
        format!("# Monthly Review - {month} {year}"),
        summarizer,
        input,
        quiet,
    )
}

/// Generate the yearly review file, grouped by calendar month. Returns
/// its path.
pub fn review_year(
    config: &Config,
    year: i32,
    summarizer: Option<&dyn Summarizer>,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<PathBuf> {
    let period = period::year_range(year)?;
    build_review(
        config,
        &period,
        format!("review_year_{year}.md"),
        format!("# Yearly Review - {year}"),
        summarizer,
        input,
        quiet,
    )
}

fn build_review(
    config: &Config,
    period: &Period,
    file_name: String,
    title: String,
    summarizer: Option<&dyn Summarizer>,
    input: &mut dyn BufRead,
    quiet: bool,
) -> Result<PathBuf> {
    config.validate()?;
    std::fs::create_dir_all(&config.journal_dir).map_err(|source| LogbookError::FileWrite {
        path: config.journal_dir.clone(),
        source,
    })?;

    let daily = collect_daily_summaries(config, period)?;
    let mut doc = Document::parse(&format!("{title}\n"));

    // The review summary condenses the daily summaries, not the file
    let source: String = daily
        .iter()
        .map(|(_, summary)| summary.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let prompt = format!(
        "Write a summary of the {} review. Use 1st person and a simple language. Use 200 characters or less.",
        period.kind.adjective()
    );
    ensure_summary(&mut doc, &source, &prompt, summarizer, input, quiet)?;

    if daily.is_empty() {
        doc.push_line(format!("No journal entries found for this {}.", period.kind));
        doc.push_line("");
    } else if period.kind == PeriodKind::Year {
        append_monthly_sections(&mut doc, &daily);
    } else {
        append_daily_sections(&mut doc, &daily);
    }

    let path = config.journal_dir.join(file_name);
    journal::write_document(&path, &doc)?;
    tracing::info!(path = %path.display(), "generated {} review", period.kind);
    Ok(path)
}

/// Summaries of the existing daily files of the period, in chronological
/// order. A file without a summary contributes an empty string.
fn collect_daily_summaries(config: &Config, period: &Period) -> Result<Vec<(NaiveDate, String)>> {
    let mut daily = Vec::new();
    for (date, path) in journal::daily_paths(config, period)? {
        if !path.exists() {
            continue;
        }
        let summary = journal::extract_summary_from_file(&path)?.unwrap_or_default();
        daily.push((date, summary));
    }
    Ok(daily)
}

fn append_daily_sections(doc: &mut Document, daily: &[(NaiveDate, String)]) {
    doc.push_line("## Daily Summaries");
    doc.push_line("");
    for (date, summary) in daily {
        doc.push_line(format!("### {}", date.format("%Y-%m-%d")));
        doc.push_line(summary.clone());
        doc.push_line("");
    }
}

fn append_monthly_sections(doc: &mut Document, daily: &[(NaiveDate, String)]) {
    doc.push_line("## Monthly Summaries");
    doc.push_line("");
    for month in 1u32..=12 {
        let entries: Vec<_> = daily.iter().filter(|(date, _)| date.month() == month).collect();
        if entries.is_empty() {
            continue;
        }
        // month is in 1..=12, the name lookup cannot miss
        let name = period::month_name(month).unwrap_or_default();
        doc.push_line(format!("### {name}"));
        doc.push_line("");
        for (date, summary) in entries {
            doc.push_line(format!("- **{}**: {}", date.format("%Y-%m-%d"), summary));
        }
        doc.push_line("");
    }
}
