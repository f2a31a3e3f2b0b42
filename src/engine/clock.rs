//! Local date/time stamps for the timestamp action.

use chrono::{Local, NaiveDateTime};

/// `yyyy-MM-dd HH:mm:ss`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current wall-clock time in the local zone.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The line appended to the buffer for a given instant.
pub fn timestamp_line(at: NaiveDateTime) -> String {
    format!("Date/Time: {}", format_timestamp(at))
}
