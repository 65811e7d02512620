//! Lenient parsing of the date and time strings carried on job records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// ## Summary
/// Parses a local time-of-day such as `09:30` or `09:30:00`.
///
/// Returns `None` for empty or unparsable input so callers can fall back to
/// their defaults.
#[must_use]
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
}

/// ## Summary
/// Parses a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp,
/// keeping only the date part.
#[must_use]
pub fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// ## Summary
/// Serde adapter for optional dates that degrades unparsable values to `None`
/// instead of rejecting the whole record.
///
/// ## Errors
/// Only fails when the value is neither a string nor null.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|value| {
        let parsed = parse_lenient_date(value);
        if parsed.is_none() {
            tracing::debug!(value, "Ignoring unparsable scheduled date");
        }
        parsed
    }))
}
