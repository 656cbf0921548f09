//! Observation Timestamp Parsing
//!
//! Location providers report when a fix was taken in a handful of formats.
//! Everything is normalized to `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::{GateError, Result};

/// Naive layouts accepted when no offset is given; interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Smallest accepted epoch-millisecond value (2000-01-01T00:00:00Z).
///
/// Bare integers below this are far more likely to be a mistyped date
/// such as `20240301` than a real fix.
pub const MIN_EPOCH_MILLIS: i64 = 946_684_800_000;

/// Parses an observation timestamp.
///
/// Accepted, in order:
/// - RFC 3339 with offset (`2024-03-01T12:00:00Z`, `2024-03-01T14:00:00+02:00`)
/// - `YYYY-MM-DD[T ]HH:MM:SS[.fff]` without offset, taken as UTC
/// - integer Unix epoch milliseconds, no earlier than [`MIN_EPOCH_MILLIS`]
pub fn parse_observed_at(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GateError::InvalidTimestamp("empty timestamp".to_string()));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(millis) = raw.parse::<i64>() {
        if millis < MIN_EPOCH_MILLIS {
            return Err(GateError::InvalidTimestamp(format!(
                "epoch millis before 2000-01-01: {raw}"
            )));
        }
        return Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
            GateError::InvalidTimestamp(format!("epoch millis out of range: {raw}"))
        });
    }

    Err(GateError::InvalidTimestamp(format!(
        "unrecognized timestamp format: {raw}"
    )))
}
