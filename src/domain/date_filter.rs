//! Date criterion parsing for note searches.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A modification-date criterion, compared in local time.
///
/// Every variant is inclusive of whole calendar days: a note modified at
/// any point on a boundary day matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Same local calendar day.
    Exact(NaiveDate),
    /// On or before the end of the day.
    Before(NaiveDate),
    /// On or after the start of the day.
    After(NaiveDate),
    /// From the start of the first day through the end of the second.
    Between(NaiveDate, NaiveDate),
}

/// Errors from parsing a date criterion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    #[error("invalid date '{input}' (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("invalid range '{input}' (expected between:YYYY-MM-DD,YYYY-MM-DD)")]
    MalformedRange { input: String },

    #[error("invalid range: start {start} is after end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
    /// Parses a date criterion.
    ///
    /// Accepts:
    /// - `YYYY-MM-DD` (exact day)
    /// - `before:YYYY-MM-DD`
    /// - `after:YYYY-MM-DD`
    /// - `between:YYYY-MM-DD,YYYY-MM-DD`
    pub fn parse(s: &str) -> Result<Self, ParseDateError> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix("before:") {
            return Ok(Self::Before(parse_day(rest)?));
        }

        if let Some(rest) = s.strip_prefix("after:") {
            return Ok(Self::After(parse_day(rest)?));
        }

        if let Some(rest) = s.strip_prefix("between:") {
            let (start, end) = rest
                .split_once(',')
                .ok_or_else(|| ParseDateError::MalformedRange { input: s.into() })?;
            if end.contains(',') {
                return Err(ParseDateError::MalformedRange { input: s.into() });
            }
            let start = parse_day(start)?;
            let end = parse_day(end)?;
            if start > end {
                return Err(ParseDateError::InvertedRange { start, end });
            }
            return Ok(Self::Between(start, end));
        }

        Ok(Self::Exact(parse_day(s)?))
    }

    /// Returns true if the timestamp falls within this criterion.
    pub fn matches<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        let day = timestamp.with_timezone(&Local).date_naive();
        match *self {
            Self::Exact(d) => day == d,
            Self::Before(d) => day <= d,
            Self::After(d) => day >= d,
            Self::Between(start, end) => start <= day && day <= end,
        }
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, ParseDateError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ParseDateError::InvalidDate { input: s.into() })
}

impl FromStr for DateFilter {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
