use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{Error, Result};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an export timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:30:00Z`) and the naive forms TikTok uses
/// in its downloads (`2024-01-15 10:30:00`), which are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidTimestamp(raw.to_string()))
}

/// Which end of a calendar day a bare date should resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// Parse a range bound: `YYYY-MM-DD` resolves to the start or end of that UTC
/// day, anything else goes through [`parse_timestamp`].
pub fn parse_date_bound(raw: &str, bound: DayBound) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let naive = match bound {
            DayBound::Start => date.and_hms_opt(0, 0, 0),
            DayBound::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
        };
        return naive
            .map(|n| n.and_utc())
            .ok_or_else(|| Error::InvalidTimestamp(trimmed.to_string()));
    }
    parse_timestamp(trimmed)
}
