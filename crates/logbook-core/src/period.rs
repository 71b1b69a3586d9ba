//! Calendar periods for review aggregation.
//!
//! A period is an inclusive date range tagged with its kind. Ranges are
//! pure date arithmetic; nothing here touches the file system.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{LogbookError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Week,
    Month,
    Year,
}

impl PeriodKind {
    /// Adjective form used in review prompts ("weekly review").
    pub fn adjective(self) -> &'static str {
        match self {
            PeriodKind::Week => "weekly",
            PeriodKind::Month => "monthly",
            PeriodKind::Year => "yearly",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKind::Week => write!(f, "week"),
            PeriodKind::Month => write!(f, "month"),
            PeriodKind::Year => write!(f, "year"),
        }
    }
}

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub kind: PeriodKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Iterate every day of the range, inclusive on both ends.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// Monday..Sunday range of the given ISO-8601 week.
///
/// ISO week 1 may start in the previous Gregorian year, and a year has 52
/// or 53 weeks; a week number the year does not have is `InvalidWeek`.
pub fn week_range(week: u32, year: i32) -> Result<Period> {
    let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(LogbookError::InvalidWeek(week))?;
    let end = start + Days::new(6);
    Ok(Period {
        kind: PeriodKind::Week,
        start,
        end,
    })
}

/// First..last calendar day of a month given by its full English name
/// (case-sensitive).
pub fn month_range(month: &str, year: i32) -> Result<Period> {
    let number =
        month_number(month).ok_or_else(|| LogbookError::InvalidMonth(month.to_string()))?;
    let start = NaiveDate::from_ymd_opt(year, number, 1)
        .ok_or_else(|| LogbookError::UsageError(format!("invalid year: {year}")))?;
    let end = start + Months::new(1) - Days::new(1);
    Ok(Period {
        kind: PeriodKind::Month,
        start,
        end,
    })
}

/// Jan 1..Dec 31 of the given year.
pub fn year_range(year: i32) -> Result<Period> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| LogbookError::UsageError(format!("invalid year: {year}")))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| LogbookError::UsageError(format!("invalid year: {year}")))?;
    Ok(Period {
        kind: PeriodKind::Year,
        start,
        end,
    })
}

pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES.iter().position(|m| *m == name).map(|p| p as u32 + 1)
}

pub fn month_name(number: u32) -> Option<&'static str> {
    MONTH_NAMES.get(number.checked_sub(1)? as usize).copied()
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
