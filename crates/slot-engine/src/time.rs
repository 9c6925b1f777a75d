//! Conversion between `HH:MM` time-of-day strings and minute offsets.
//!
//! Minute offsets count from midnight, so `"09:00"` is `540` and `"23:59"` is
//! `1439`. Parsing is strict; formatting is not range-checked.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse a 24-hour `HH:MM` string into minutes since midnight.
///
/// Rejects non-numeric fields, hours above 23, minutes above 59, any
/// separator other than `:`, whitespace anywhere, and trailing input.
pub fn to_minutes(time_of_day: &str) -> Result<i32> {
    // chrono skips whitespace before numeric fields; only digits and `:` are allowed.
    if !time_of_day.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return Err(SlotError::Format(format!(
            "'{}': expected digits separated by ':'",
            time_of_day
        )));
    }
    let parsed = NaiveTime::parse_from_str(time_of_day, "%H:%M")
        .map_err(|e| SlotError::Format(format!("'{}': {}", time_of_day, e)))?;
    Ok((parsed.hour() * 60 + parsed.minute()) as i32)
}

/// Format minutes since midnight as a zero-padded `HH:MM` string.
///
/// Values outside `0..1440` still format: `1500` gives `"25:00"` and `-30`
/// gives `"-1:30"`.
pub fn to_time(minutes: i32) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{:02}:{:02}", hours, mins)
}
