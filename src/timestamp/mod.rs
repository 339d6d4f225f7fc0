//! Timestamp format engine
//!
//! Converts a `(unix seconds, format code)` pair into the text Discord shows for a
//! `<t:UNIX:FORMAT>` token. Absolute styles are delegated to a [`LocaleFormatter`];
//! the relative style (`R`) is computed here.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub mod locale;
pub mod relative;
pub mod token;

pub use locale::{LocaleFormatter, PatternFormatter, StylePatterns, Zone};
pub use relative::describe_relative;
pub use token::{decode, encode, TimestampToken};

/// Errors produced by the format engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("Invalid format code: {0:?} (expected one of t, T, d, D, f, F, R)")]
    InvalidFormatCode(String),

    #[error("Malformed timestamp token: {0:?}")]
    MalformedToken(String),

    #[error("Invalid moment: {0}")]
    InvalidMoment(String),

    #[error("Invalid format pattern: {0:?}")]
    InvalidPattern(String),
}

/// One of the seven display styles a token can request.
///
/// Variants are declared in the order Discord lists them, which is also the
/// iteration order of [`FormatCode::ALL`] and the ordering of previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatCode {
    /// `t` - short time
    ShortTime,
    /// `T` - medium time
    LongTime,
    /// `d` - short date
    ShortDate,
    /// `D` - long date
    LongDate,
    /// `f` - long date with short time
    ShortDateTime,
    /// `F` - weekday, long date and short time
    LongDateTime,
    /// `R` - relative
    Relative,
}

impl FormatCode {
    pub const ALL: [FormatCode; 7] = [
        FormatCode::ShortTime,
        FormatCode::LongTime,
        FormatCode::ShortDate,
        FormatCode::LongDate,
        FormatCode::ShortDateTime,
        FormatCode::LongDateTime,
        FormatCode::Relative,
    ];

    /// The single letter used inside a token
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            FormatCode::ShortTime => 't',
            FormatCode::LongTime => 'T',
            FormatCode::ShortDate => 'd',
            FormatCode::LongDate => 'D',
            FormatCode::ShortDateTime => 'f',
            FormatCode::LongDateTime => 'F',
            FormatCode::Relative => 'R',
        }
    }

    /// Human label for format pickers
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormatCode::ShortTime => "Short Time",
            FormatCode::LongTime => "Long Time",
            FormatCode::ShortDate => "Short Date",
            FormatCode::LongDate => "Long Date",
            FormatCode::ShortDateTime => "Short Date/Time",
            FormatCode::LongDateTime => "Long Date/Time",
            FormatCode::Relative => "Relative Time",
        }
    }

    /// How this code is displayed
    #[must_use]
    pub fn spec(self) -> FormatSpec {
        match self {
            FormatCode::ShortTime => FormatSpec::Absolute(StyleDirective::time(TimeStyle::Short)),
            FormatCode::LongTime => FormatSpec::Absolute(StyleDirective::time(TimeStyle::Medium)),
            FormatCode::ShortDate => FormatSpec::Absolute(StyleDirective::date(DateStyle::Short)),
            FormatCode::LongDate => FormatSpec::Absolute(StyleDirective::date(DateStyle::Long)),
            FormatCode::ShortDateTime => FormatSpec::Absolute(StyleDirective::date_time(DateStyle::Long, TimeStyle::Short)),
            FormatCode::LongDateTime => FormatSpec::Absolute(StyleDirective::date_time(DateStyle::Full, TimeStyle::Short)),
            FormatCode::Relative => FormatSpec::Relative,
        }
    }

    /// Position in [`FormatCode::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next code in picker order, wrapping around
    #[must_use]
    pub fn next(self) -> FormatCode {
        FormatCode::ALL[(self.index() + 1) % FormatCode::ALL.len()]
    }

    /// Previous code in picker order, wrapping around
    #[must_use]
    pub fn previous(self) -> FormatCode {
        let len = FormatCode::ALL.len();
        FormatCode::ALL[(self.index() + len - 1) % len]
    }
}

impl TryFrom<char> for FormatCode {
    type Error = TimestampError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        FormatCode::ALL
            .into_iter()
            .find(|code| code.as_char() == c)
            .ok_or_else(|| TimestampError::InvalidFormatCode(c.to_string()))
    }
}

impl FromStr for FormatCode {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => FormatCode::try_from(c),
            _ => Err(TimestampError::InvalidFormatCode(s.to_string())),
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Date granularity requested from the locale provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Long,
    /// Long date prefixed with the weekday name
    Full,
}

/// Time granularity requested from the locale provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    Short,
    Medium,
}

/// A date/time style request for the host locale provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDirective {
    pub date: Option<DateStyle>,
    pub time: Option<TimeStyle>,
}

impl StyleDirective {
    pub const fn date(date: DateStyle) -> Self {
        Self { date: Some(date), time: None }
    }

    pub const fn time(time: TimeStyle) -> Self {
        Self { date: None, time: Some(time) }
    }

    pub const fn date_time(date: DateStyle, time: TimeStyle) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
        }
    }
}

/// Static display rule for a format code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec {
    Absolute(StyleDirective),
    Relative,
}

/// Renders moments through an injected locale provider.
#[derive(Debug, Clone)]
pub struct FormatEngine<L> {
    locale: L,
}

impl<L: LocaleFormatter> FormatEngine<L> {
    pub fn new(locale: L) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// Render `unix_seconds` in the style selected by `code`.
    ///
    /// `now` is only consulted for [`FormatCode::Relative`].
    pub fn render(&self, unix_seconds: i64, code: FormatCode, now: DateTime<Utc>) -> Result<String, TimestampError> {
        match code.spec() {
            FormatSpec::Absolute(directive) => self.locale.format(unix_seconds, directive),
            FormatSpec::Relative => describe_relative(unix_seconds, now.timestamp_millis()),
        }
    }

    /// Render a token string
    pub fn render_token(&self, token: &str, now: DateTime<Utc>) -> Result<String, TimestampError> {
        let (unix_seconds, code) = decode(token)?;
        self.render(unix_seconds, code, now)
    }

    /// Render every style for the same moment, keyed by format code
    pub fn preview_all(
        &self,
        unix_seconds: i64,
        now: DateTime<Utc>,
    ) -> Result<BTreeMap<FormatCode, String>, TimestampError> {
        FormatCode::ALL
            .into_iter()
            .map(|code| Ok((code, self.render(unix_seconds, code, now)?)))
            .collect()
    }
}
