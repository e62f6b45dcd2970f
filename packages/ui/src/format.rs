//! Display formatting for backend timestamps, in the viewer's local time.
//!
//! Offset-free backend values are wall-clock times in the viewer's zone and
//! are shown unchanged; values with an offset are converted.

use api::parse_timestamp_in;
use chrono::{Local, TimeZone};

/// `"10:30 AM"`, for slot chips.
pub fn slot_time(value: &str) -> String {
    slot_time_in(value, &Local)
}

/// `"Monday, 2 January 2030 at 10:30 AM"`, for appointment cards.
pub fn appointment_time(value: &str) -> String {
    appointment_time_in(value, &Local)
}

/// `"1 March 2024"`, for record and article dates.
pub fn long_date(value: &str) -> String {
    long_date_in(value, &Local)
}

pub fn slot_time_in<Tz: TimeZone>(value: &str, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp_in(value, zone)
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn appointment_time_in<Tz: TimeZone>(value: &str, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp_in(value, zone)
        .map(|t| t.format("%A, %-d %B %Y at %I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn long_date_in<Tz: TimeZone>(value: &str, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp_in(value, zone)
        .map(|t| t.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}
