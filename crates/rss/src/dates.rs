// ABOUTME: RFC-822 date parsing for pubDate and lastBuildDate elements.
// ABOUTME: Tries an ordered pattern list and re-serializes with the most complete pattern.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Result, RssError};

/// Accepted RFC-822 patterns, most complete first. The first pattern that
/// parses wins; the first pattern is also the canonical output form.
static PATTERNS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M %z",
];

/// The same patterns accepting 2-digit years.
static PATTERNS_SHORT_YEAR: &[&str] = &[
    "%a, %d %b %y %H:%M:%S %z",
    "%d %b %y %H:%M:%S %z",
    "%a, %d %b %y %H:%M %z",
    "%d %b %y %H:%M %z",
];

/// RFC-822 named zones and their offsets in seconds from UTC. chrono's %z
/// only understands numeric offsets, so named zones are substituted before
/// the pattern list runs.
static NAMED_ZONES: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("UT", 0),
        ("GMT", 0),
        ("UTC", 0),
        ("EST", -5 * 3600),
        ("EDT", -4 * 3600),
        ("CST", -6 * 3600),
        ("CDT", -5 * 3600),
        ("MST", -7 * 3600),
        ("MDT", -6 * 3600),
        ("PST", -8 * 3600),
        ("PDT", -7 * 3600),
        ("Z", 0),
    ])
});

/// A date element value (pubDate, lastBuildDate, item pubDate).
///
/// Parsed once at construction; re-serialization always uses the canonical
/// (most complete) pattern regardless of which pattern matched the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RssDate(DateTime<FixedOffset>);

impl RssDate {
    /// Parses a date string against the accepted RFC-822 variants.
    /// Failure of all patterns is a date-parse error carrying the input.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Some(dt) = parse_variants(trimmed) {
            return Ok(RssDate(dt));
        }
        // Feeds in the wild often carry a weekday that disagrees with the
        // date itself, which chrono's %a rejects. Retry without it.
        if let Some(rest) = strip_weekday(trimmed) {
            if let Some(dt) = parse_variants(rest) {
                return Ok(RssDate(dt));
            }
        }
        Err(RssError::DateParse(text.to_string()))
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Canonical text form, always the most complete pattern.
    pub fn canonical(&self) -> String {
        self.0.format(PATTERNS[0]).to_string()
    }
}

impl fmt::Display for RssDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

fn parse_variants(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Some(dt) = try_patterns(s) {
        return Some(dt);
    }
    // Retry with a trailing named zone replaced by its numeric offset.
    let (base, zone) = s.rsplit_once(char::is_whitespace)?;
    let offset_secs = NAMED_ZONES.get(zone)?;
    let sign = if *offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.abs();
    let candidate = format!(
        "{} {}{:02}{:02}",
        base.trim_end(),
        sign,
        abs / 3600,
        (abs % 3600) / 60
    );
    try_patterns(&candidate)
}

fn try_patterns(s: &str) -> Option<DateTime<FixedOffset>> {
    for pattern in PATTERNS.iter().chain(PATTERNS_SHORT_YEAR) {
        if let Ok(dt) = DateTime::parse_from_str(s, pattern) {
            return adjust_two_digit_year(dt);
        }
    }
    None
}

/// chrono's %Y accepts a 2-digit token as a literal ancient year, so a
/// parsed year below 100 is remapped into the same window %y uses
/// (00-68 into the 2000s, 69-99 into the 1900s). Feeds never mean 24 AD.
fn adjust_two_digit_year(dt: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    match dt.year() {
        year @ 0..=68 => dt.with_year(year + 2000),
        year @ 69..=99 => dt.with_year(year + 1900),
        _ => Some(dt),
    }
}

/// Splits off a leading three-letter weekday token ("Tue, ") so the
/// weekday-free patterns can have a go at the rest.
fn strip_weekday(s: &str) -> Option<&str> {
    let (day, rest) = s.split_once(',')?;
    if day.len() == 3 && day.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(rest.trim_start())
    } else {
        None
    }
}
