//! Host locale provider
//!
//! Absolute styles are thin requests to a [`LocaleFormatter`]. The bundled
//! [`PatternFormatter`] renders with chrono strftime patterns in a configurable zone;
//! its default patterns reproduce the en-US output of the browser `Intl` formatter.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

use super::{DateStyle, StyleDirective, TimeStyle, TimestampError};

/// Formats a moment according to a style directive.
pub trait LocaleFormatter {
    fn format(&self, unix_seconds: i64, directive: StyleDirective) -> Result<String, TimestampError>;
}

/// Time zone used to interpret and display moments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for Zone {
    type Err = TimestampError;

    /// Accepts `local`, `utc`, or an offset such as `+05:30` or `-0800`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => Ok(Zone::Local),
            "utc" | "z" => Ok(Zone::Utc),
            _ => trimmed
                .parse::<FixedOffset>()
                .map(Zone::Fixed)
                .map_err(|e| TimestampError::InvalidMoment(format!("unrecognized timezone {trimmed:?}: {e}"))),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Utc => write!(f, "utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// strftime patterns for each style granularity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatterns {
    pub short_time: String,
    pub medium_time: String,
    pub short_date: String,
    pub long_date: String,
    /// Long date with the weekday name
    pub full_date: String,
    /// Literal text placed between the date and time parts when both are requested
    pub date_time_separator: String,
}

impl Default for StylePatterns {
    fn default() -> Self {
        Self {
            short_time: "%-I:%M %p".to_string(),
            medium_time: "%-I:%M:%S %p".to_string(),
            short_date: "%-m/%-d/%y".to_string(),
            long_date: "%B %-d, %Y".to_string(),
            full_date: "%A, %B %-d, %Y".to_string(),
            date_time_separator: " at ".to_string(),
        }
    }
}

impl StylePatterns {
    /// Check that every pattern is non-empty and understood by chrono
    pub fn validate(&self) -> Result<(), TimestampError> {
        for pattern in [
            &self.short_time,
            &self.medium_time,
            &self.short_date,
            &self.long_date,
            &self.full_date,
        ] {
            if pattern.trim().is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(TimestampError::InvalidPattern(pattern.clone()));
            }
        }
        Ok(())
    }

    /// Assemble the full pattern for a directive
    #[must_use]
    pub fn pattern_for(&self, directive: StyleDirective) -> String {
        let date = directive.date.map(|style| match style {
            DateStyle::Short => self.short_date.as_str(),
            DateStyle::Long => self.long_date.as_str(),
            DateStyle::Full => self.full_date.as_str(),
        });
        let time = directive.time.map(|style| match style {
            TimeStyle::Short => self.short_time.as_str(),
            TimeStyle::Medium => self.medium_time.as_str(),
        });

        match (date, time) {
            (Some(date), Some(time)) => format!("{date}{}{time}", self.date_time_separator.replace('%', "%%")),
            (Some(date), None) => date.to_string(),
            (None, Some(time)) => time.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Pattern-driven locale provider
#[derive(Debug, Clone, Default)]
pub struct PatternFormatter {
    zone: Zone,
    patterns: StylePatterns,
}

impl PatternFormatter {
    pub fn new(zone: Zone, patterns: StylePatterns) -> Result<Self, TimestampError> {
        patterns.validate()?;
        Ok(Self { zone, patterns })
    }

    /// UTC with the default en-US patterns
    #[must_use]
    pub fn utc() -> Self {
        Self {
            zone: Zone::Utc,
            patterns: StylePatterns::default(),
        }
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    fn format_in<Tz>(tz: &Tz, unix_seconds: i64, pattern: &str) -> Result<String, TimestampError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let moment: DateTime<Tz> = tz
            .timestamp_opt(unix_seconds, 0)
            .single()
            .ok_or_else(|| TimestampError::InvalidMoment(format!("{unix_seconds} is out of range")))?;

        let mut out = String::new();
        write!(out, "{}", moment.format(pattern)).map_err(|_| TimestampError::InvalidPattern(pattern.to_string()))?;
        Ok(out)
    }
}

impl LocaleFormatter for PatternFormatter {
    fn format(&self, unix_seconds: i64, directive: StyleDirective) -> Result<String, TimestampError> {
        let pattern = self.patterns.pattern_for(directive);
        match self.zone {
            Zone::Local => Self::format_in(&Local, unix_seconds, &pattern),
            Zone::Utc => Self::format_in(&Utc, unix_seconds, &pattern),
            Zone::Fixed(offset) => Self::format_in(&offset, unix_seconds, &pattern),
        }
    }
}
