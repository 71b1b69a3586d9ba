//! Placeholder renderer for file names, daily skeletons, and entry lines.
//!
//! Templates contain literal text plus `{date:FMT}`, `{time:FMT}`,
//! `{entry}`, and `{summary}` placeholders, where FMT is a chrono strftime
//! format. Placeholders never nest and substituted values are not
//! re-scanned.

use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{LogbookError, Result};

/// Values available to a template. Only the fields a call site actually
/// has are populated; referencing an absent field is a template error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateData<'a> {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveDateTime>,
    pub entry: Option<&'a str>,
    pub summary: Option<&'a str>,
}

/// Render `template` with the provided data.
pub fn render(template: &str, data: &TemplateData) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| LogbookError::Template {
            reason: format!("unclosed placeholder in template: {template}"),
        })?;
        render_token(&mut out, &after[..close], data)?;
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn render_token(out: &mut String, token: &str, data: &TemplateData) -> Result<()> {
    if let Some(fmt) = token.strip_prefix("date:") {
        let date = data.date.ok_or_else(|| missing("date", token))?;
        return write_formatted(out, &date.format(fmt), fmt);
    }
    if let Some(fmt) = token.strip_prefix("time:") {
        let time = data.time.ok_or_else(|| missing("time", token))?;
        return write_formatted(out, &time.format(fmt), fmt);
    }
    match token {
        "entry" => {
            out.push_str(data.entry.ok_or_else(|| missing("entry", token))?);
            Ok(())
        }
        "summary" => {
            out.push_str(data.summary.ok_or_else(|| missing("summary", token))?);
            Ok(())
        }
        other => Err(LogbookError::Template {
            reason: format!("unknown placeholder: {{{other}}}"),
        }),
    }
}

fn write_formatted(out: &mut String, value: &dyn std::fmt::Display, fmt: &str) -> Result<()> {
    // chrono reports a bad strftime format through fmt::Error
    write!(out, "{value}").map_err(|_| LogbookError::Template {
        reason: format!("invalid date/time format: {fmt}"),
    })
}

fn missing(field: &str, token: &str) -> LogbookError {
    LogbookError::Template {
        reason: format!("no {field} available for {{{token}}}"),
    }
}
