use chrono::{DateTime, Utc};

/// `Jan 15, 2024`: short English month, unpadded day, four-digit year, in UTC
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn format_day_span(days: i64) -> String {
    match days {
        0 => "same day".to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}
