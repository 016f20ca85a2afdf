//! Date helpers.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Formats the calendar date part of an instant as `YYYY-MM-DD`.
pub fn iso_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Formats an instant as an ISO 8601 timestamp with millisecond precision,
/// e.g. `2024-12-25T10:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
