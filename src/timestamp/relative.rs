//! Relative time rendering (`R` tokens)
//!
//! Mirrors the coarse phrasing the Discord client uses: a single unit, the largest
//! one that is non-zero, never a combination such as "1 day 3 hours".

use super::TimestampError;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Describe `unix_seconds` relative to `now_millis` (milliseconds since the epoch).
///
/// Minutes are rounded to the nearest whole minute (halves round up), then hours and
/// days are derived by integer division. Anything under one minute away is
/// "just now". Past and present moments read "N units ago", future ones "in N units".
pub fn describe_relative(unix_seconds: i64, now_millis: i64) -> Result<String, TimestampError> {
    let diff = unix_seconds
        .checked_mul(MILLIS_PER_SECOND)
        .and_then(|target| target.checked_sub(now_millis))
        .ok_or_else(|| TimestampError::InvalidMoment(format!("{unix_seconds} is too far from now to compare")))?;

    let abs_diff = diff.unsigned_abs();
    let minutes = (abs_diff + (MILLIS_PER_MINUTE as u64) / 2) / MILLIS_PER_MINUTE as u64;
    if minutes < 1 {
        return Ok("just now".to_string());
    }

    let hours = minutes / 60;
    let days = hours / 24;

    let (count, unit) = if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else {
        (minutes, "minute")
    };
    let plural = if count > 1 { "s" } else { "" };

    if diff > 0 {
        Ok(format!("in {count} {unit}{plural}"))
    } else {
        Ok(format!("{count} {unit}{plural} ago"))
    }
}
