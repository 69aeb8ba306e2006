//! Display Formatting
//!
//! Small helpers turning backend values into table text.

use chrono::{DateTime, TimeZone};

/// Shown when a value is missing
pub const PLACEHOLDER: &str = "-";

const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// `dd.mm.yyyy HH:MM` in the zone of `dt`.
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(DATE_FORMAT).to_string()
}

pub fn format_optional_date<Tz: TimeZone>(dt: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.map_or_else(|| PLACEHOLDER.to_string(), format_date)
}

/// Cut `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn summarize(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    short.truncate(short.trim_end().len());
    short.push('…');
    short
}
