//! `<t:UNIX:FORMAT>` token construction and parsing

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use super::{FormatCode, TimestampError};

// Accepts an optional sign so pre-1970 moments survive a round trip.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<t:(-?\d+):([A-Za-z])>$").expect("token pattern is a valid regex"));

/// A well-formed timestamp token.
///
/// The token is the only stored representation of a moment and its style; display
/// text is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampToken {
    unix_seconds: i64,
    code: FormatCode,
}

impl TimestampToken {
    #[must_use]
    pub fn new(unix_seconds: i64, code: FormatCode) -> Self {
        Self { unix_seconds, code }
    }

    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.unix_seconds
    }

    #[must_use]
    pub fn code(&self) -> FormatCode {
        self.code
    }
}

impl fmt::Display for TimestampToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<t:{}:{}>", self.unix_seconds, self.code)
    }
}

impl FromStr for TimestampToken {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (unix_seconds, code) = decode(s)?;
        Ok(Self::new(unix_seconds, code))
    }
}

/// Build a token from a moment and a format letter
pub fn encode(unix_seconds: i64, code: char) -> Result<TimestampToken, TimestampError> {
    Ok(TimestampToken::new(unix_seconds, FormatCode::try_from(code)?))
}

/// Split a token into its moment and format code.
///
/// Surrounding whitespace is ignored. A token that does not match the grammar, or
/// whose number does not fit in an `i64`, is malformed; a well-formed token with a
/// letter outside the seven known codes reports the letter.
pub fn decode(token: &str) -> Result<(i64, FormatCode), TimestampError> {
    let trimmed = token.trim();
    let captures = TOKEN_PATTERN
        .captures(trimmed)
        .ok_or_else(|| TimestampError::MalformedToken(trimmed.to_string()))?;

    let unix_seconds = captures[1]
        .parse::<i64>()
        .map_err(|_| TimestampError::MalformedToken(trimmed.to_string()))?;
    let code = captures[2].parse::<FormatCode>()?;

    Ok((unix_seconds, code))
}
