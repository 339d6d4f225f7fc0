//! Schedule manager
//!
//! Owns the ordered list of named timestamp entries. Rendering is delegated to the
//! [`FormatEngine`]; entries only store the token they were created with.

use chrono::{DateTime, Utc};

use crate::constants::DEFAULT_ENTRY_NAME;
use crate::timestamp::{decode, FormatCode, FormatEngine, LocaleFormatter, TimestampError, TimestampToken};

/// Errors raised while editing the schedule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Please select a date and time")]
    MissingDateTime,

    #[error("Index {index} is out of range for a schedule of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// A named timestamp in the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub name: String,
    pub token: TimestampToken,
    pub unix_seconds: i64,
}

impl ScheduleEntry {
    /// Create an entry, falling back to the default name when `name` is blank
    pub fn new(name: &str, token: TimestampToken) -> Self {
        let trimmed = name.trim();
        Self {
            name: if trimmed.is_empty() {
                DEFAULT_ENTRY_NAME.to_string()
            } else {
                trimmed.to_string()
            },
            unix_seconds: token.unix_seconds(),
            token,
        }
    }

    /// Render the entry's token as it would appear in Discord
    pub fn render<L: LocaleFormatter>(&self, engine: &FormatEngine<L>, now: DateTime<Utc>) -> Result<String, TimestampError> {
        let (unix_seconds, code) = decode(&self.token.to_string())?;
        engine.render(unix_seconds, code, now)
    }
}

/// Ordered, in-memory list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScheduleEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Append a new entry for `unix_seconds` in the given style
    ///
    /// # Errors
    /// * `MissingDateTime` when no moment was chosen
    pub fn add_entry(
        &mut self,
        name: &str,
        unix_seconds: Option<i64>,
        code: FormatCode,
    ) -> Result<&ScheduleEntry, ScheduleError> {
        let unix_seconds = unix_seconds.ok_or(ScheduleError::MissingDateTime)?;
        let entry = ScheduleEntry::new(name, TimestampToken::new(unix_seconds, code));
        log::info!("Adding schedule entry {} ({})", entry.name, entry.token);
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the entry at `index`, keeping the order of the rest
    pub fn remove_entry(&mut self, index: usize) -> Result<ScheduleEntry, ScheduleError> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        log::info!("Removed schedule entry {} ({})", removed.name, removed.token);
        Ok(removed)
    }

    /// Move the entry at `index` so it ends up at `target`, shifting the entries between
    ///
    /// Both positions must be inside the schedule; otherwise nothing changes.
    pub fn move_entry(&mut self, index: usize, target: usize) -> Result<(), ScheduleError> {
        self.check_index(index)?;
        self.check_index(target)?;
        if index != target {
            let entry = self.entries.remove(index);
            self.entries.insert(target, entry);
        }
        Ok(())
    }

    /// Swap the entry with the one above it
    pub fn move_up(&mut self, index: usize) -> Result<(), ScheduleError> {
        let target = index.checked_sub(1).ok_or(ScheduleError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.move_entry(index, target)
    }

    /// Swap the entry with the one below it
    pub fn move_down(&mut self, index: usize) -> Result<(), ScheduleError> {
        self.move_entry(index, index.saturating_add(1))
    }

    /// Render the entry at `index`
    pub fn render_entry<L: LocaleFormatter>(
        &self,
        index: usize,
        engine: &FormatEngine<L>,
        now: DateTime<Utc>,
    ) -> Result<String, ScheduleError> {
        self.check_index(index)?;
        Ok(self.entries[index].render(engine, now)?)
    }

    /// Numbered listing used for "Copy Schedule"
    ///
    /// One `"{n}. {name} - {token}"` line per entry, starting at 1, newline separated.
    pub fn export_all(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {} - {}", i + 1, entry.name, entry.token))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_index(&self, index: usize) -> Result<(), ScheduleError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ScheduleError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}
