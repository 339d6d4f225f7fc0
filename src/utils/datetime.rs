//! Date and time input helpers
//!
//! This module turns the text of the date/time field into a Unix moment and produces
//! the initial field value, using the same `YYYY-MM-DDTHH:MM` shape as an HTML
//! `datetime-local` input.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::timestamp::{TimestampError, Zone};

/// Format written into the date/time field
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Every shape accepted when reading the date/time field
const ACCEPTED_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a date/time field value into a naive (zone-less) datetime
///
/// # Arguments
/// * `input` - Field text such as `2025-01-15T14:30`
///
/// # Returns
/// * `Result<NaiveDateTime, TimestampError>` - Parsed value or `InvalidMoment`
pub fn parse_naive_input(input: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = input.trim();
    ACCEPTED_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TimestampError::InvalidMoment(format!("cannot read {trimmed:?} as a date and time")))
}

/// Parse a date/time field value into Unix seconds, interpreting it in `zone`
///
/// Returns `Ok(None)` for an empty field so callers can report a missing
/// date/time distinctly from an unreadable one.
pub fn parse_moment(input: &str, zone: Zone) -> Result<Option<i64>, TimestampError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let naive = parse_naive_input(input)?;
    let resolved = match zone {
        Zone::Local => resolve_local(&Local, naive),
        Zone::Utc => resolve_local(&Utc, naive),
        Zone::Fixed(offset) => resolve_local(&offset, naive),
    };
    resolved
        .map(Some)
        .ok_or_else(|| TimestampError::InvalidMoment(format!("{naive} does not exist in the {zone} zone")))
}

/// Map a wall-clock time to an instant.
///
/// Ambiguous times (clocks going back) take the earliest instant; times that fall in
/// a gap (clocks going forward) move one hour later.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<i64> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.timestamp())
}

/// Current time in `zone`, truncated to the minute, formatted for the date/time field
pub fn format_now_input(zone: Zone) -> String {
    format_input(Utc::now(), zone)
}

/// Format an instant for the date/time field, truncated to the minute
pub fn format_input(moment: DateTime<Utc>, zone: Zone) -> String {
    let moment = moment.with_second(0).and_then(|m| m.with_nanosecond(0)).unwrap_or(moment);
    match zone {
        Zone::Local => moment.with_timezone(&Local).format(DATETIME_INPUT_FORMAT).to_string(),
        Zone::Utc => moment.format(DATETIME_INPUT_FORMAT).to_string(),
        Zone::Fixed(offset) => moment.with_timezone(&offset).format(DATETIME_INPUT_FORMAT).to_string(),
    }
}
