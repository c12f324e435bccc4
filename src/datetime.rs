//! Date/time parsing and display formatting.
//!
//! Scheduled times are wall-clock values with no timezone attached; whatever
//! the user entered is stored and displayed unchanged.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a user-entered date/time string.
///
/// Accepts `YYYY-MM-DD` (midnight) and `YYYY-MM-DD HH:MM[:SS]` with either a
/// space or `T` separating date and time.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for format in INPUT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(Error::InvalidArgument(format!(
        "unrecognized date/time '{trimmed}' (expected YYYY-MM-DD[THH:MM[:SS]])"
    )))
}

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Fixed long display format, e.g. `Jan 1, 2024, 10:00:00 AM`.
pub fn format_long(datetime: NaiveDateTime) -> String {
    datetime.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}
