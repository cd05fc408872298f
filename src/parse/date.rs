use chrono::{Month, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]*) ([0-9]{1,2}),\s([0-9]{4})").expect("date pattern compiles")
});

/// Full English month name to 1-based month number; abbreviations are rejected.
fn full_month(word: &str) -> Option<u32> {
    word.parse::<Month>()
        .ok()
        .filter(|m| m.name().eq_ignore_ascii_case(word))
        .map(|m| m.number_from_month())
}

/// Reads the first `<Month> <day>, <year>` date in `text`.
///
/// Only the first match counts: if its word is not a full month name the
/// line is rejected rather than searched further. `line` is the 1-based
/// line number used in errors.
pub fn extract_date(text: &str, line: usize) -> Result<NaiveDate, ParseError> {
    let missing = || ParseError::MissingDate {
        line,
        text: text.to_owned(),
    };
    let caps = DATE_RE.captures(text).ok_or_else(missing)?;

    let month = full_month(&caps[1]).ok_or_else(|| ParseError::UnknownMonth {
        line,
        word: caps[1].to_owned(),
    })?;
    let day: u32 = caps[2].parse().map_err(|_| missing())?;
    let year: i32 = caps[3].parse().map_err(|_| missing())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate {
        line,
        year,
        month,
        day,
    })
}
