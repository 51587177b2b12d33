//! Flexible date parsing and pattern-based formatting
//!
//! Accepts the three shapes people actually type into a date cell:
//!
//! - ISO: `2026-01-05`, `2026-01-05T14:30`, `2026-01-05 14:30:15`
//! - Dotted: `5.1.2026`, `05.01.2026 9:15`
//! - Slashed: `13/02/2026`, `02/03/2026 18:00` (day/month order resolved below)
//!
//! All values are local calendar dates with an optional local time of day.
//! There is no timezone handling.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // 2026-01-05, 2026-01-05T14:30, 2026-01-05 14:30:15
    static ref ISO_DATE: Regex = Regex::new(
        r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ](\d{1,2}):(\d{2})(?::(\d{2}))?)?$"
    ).expect("ISO date pattern compiles");

    // 5.1.2026, 05.01.2026 9:15
    static ref DOT_DATE: Regex = Regex::new(
        r"^(\d{1,2})\.(\d{1,2})\.(\d{4})(?:\s+(\d{1,2}):(\d{2}))?$"
    ).expect("dotted date pattern compiles");

    // 13/02/2026, 02/03/2026 18:00
    static ref SLASH_DATE: Regex = Regex::new(
        r"^(\d{1,2})/(\d{1,2})/(\d{4})(?:\s+(\d{1,2}):(\d{2}))?$"
    ).expect("slashed date pattern compiles");
}

/// Parse date text into a calendar instant.
///
/// Shapes are tried in order ISO, dotted, slashed; the first shape that
/// matches decides the result. A matching shape with an impossible calendar
/// value (`31.02.2026`, `2026-13-01`) yields `None` rather than falling
/// through to the next shape.
///
/// `pattern_hint` only matters for slashed dates where both leading
/// components are <= 12: a hint starting with the day token (`dd/mm/yyyy`)
/// reads day-first, any other hint reads month-first, no hint reads
/// day-first.
pub fn parse(text: &str, pattern_hint: Option<&str>) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_DATE.captures(text) {
        let year = number(&caps, 1)? as i32;
        return build(
            year,
            number(&caps, 2)?,
            number(&caps, 3)?,
            optional_number(&caps, 4)?,
            optional_number(&caps, 5)?,
            optional_number(&caps, 6)?,
        );
    }

    if let Some(caps) = DOT_DATE.captures(text) {
        return build(
            number(&caps, 3)? as i32,
            number(&caps, 2)?,
            number(&caps, 1)?,
            optional_number(&caps, 4)?,
            optional_number(&caps, 5)?,
            0,
        );
    }

    if let Some(caps) = SLASH_DATE.captures(text) {
        let (day, month) = resolve_day_month(number(&caps, 1)?, number(&caps, 2)?, pattern_hint);
        return build(
            number(&caps, 3)? as i32,
            month,
            day,
            optional_number(&caps, 4)?,
            optional_number(&caps, 5)?,
            0,
        );
    }

    None
}

/// Decide which of the two leading slash components is the day
fn resolve_day_month(first: u32, second: u32, pattern_hint: Option<&str>) -> (u32, u32) {
    match (first > 12, second > 12) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ if hint_is_day_first(pattern_hint) => (first, second),
        _ => (second, first),
    }
}

fn hint_is_day_first(pattern_hint: Option<&str>) -> bool {
    match pattern_hint.map(str::trim).filter(|hint| !hint.is_empty()) {
        Some(hint) => hint.starts_with(['d', 'D']),
        None => true,
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Missing optional groups read as zero; present ones must parse
fn optional_number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    match caps.get(group) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn build(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

/// Format the date part of an instant into `pattern`.
///
/// Recognised tokens (case-insensitive): `yyyy`, `yy`, `mm` (month), `dd`.
/// Everything else is copied through unchanged.
pub fn format_date(instant: &NaiveDateTime, pattern: &str) -> String {
    render(instant, pattern, false)
}

/// Format date and time of day into `pattern`.
///
/// Adds `hh`, `ss` and a time-of-day `mm` (minutes) once an `hh` token has
/// been seen. A pattern without an hour token gets ` hh:mm` appended, so a
/// plain date pattern such as `dd.mm.yyyy` also serves date-time columns.
pub fn format_date_time(instant: &NaiveDateTime, pattern: &str) -> String {
    if pattern.to_ascii_lowercase().contains("hh") {
        render(instant, pattern, true)
    } else {
        let mut out = render(instant, pattern, false);
        let _ = write!(out, " {:02}:{:02}", instant.hour(), instant.minute());
        out
    }
}

fn render(instant: &NaiveDateTime, pattern: &str, with_time: bool) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 6);
    let mut seen_hour = false;
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];
        if token_at(rest, "yyyy") {
            let _ = write!(out, "{:04}", instant.year());
            i += 4;
        } else if token_at(rest, "yy") {
            let _ = write!(out, "{:02}", instant.year().rem_euclid(100));
            i += 2;
        } else if token_at(rest, "dd") {
            let _ = write!(out, "{:02}", instant.day());
            i += 2;
        } else if with_time && token_at(rest, "hh") {
            seen_hour = true;
            let _ = write!(out, "{:02}", instant.hour());
            i += 2;
        } else if token_at(rest, "mm") {
            let value = if with_time && seen_hour {
                instant.minute()
            } else {
                instant.month()
            };
            let _ = write!(out, "{:02}", value);
            i += 2;
        } else if with_time && token_at(rest, "ss") {
            let _ = write!(out, "{:02}", instant.second());
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn token_at(rest: &[char], token: &str) -> bool {
    rest.len() >= token.len()
        && rest
            .iter()
            .zip(token.chars())
            .all(|(c, t)| c.to_ascii_lowercase() == t)
}
