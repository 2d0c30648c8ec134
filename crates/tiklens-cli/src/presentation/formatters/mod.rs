pub mod text;
pub mod time;

pub use text::{pluralize, profile_url, signed, truncate};
pub use time::{format_date, format_datetime, format_day_span};
