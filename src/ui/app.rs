//! Application state and business logic

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::constants::{
    ERROR_COPY_ALL_FAILED, ERROR_COPY_FAILED, ERROR_SCHEDULE_EMPTY, SUCCESS_COPIED, SUCCESS_ENTRY_ADDED,
    SUCCESS_ENTRY_DELETED,
};
use crate::notification::{Notifier, ToastBoard};
use crate::schedule::{Schedule, ScheduleError};
use crate::timestamp::{FormatCode, FormatEngine, PatternFormatter, TimestampToken, Zone};
use crate::utils::datetime;

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    DateTime,
    Format,
    Schedule,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::DateTime,
            Focus::DateTime => Focus::Format,
            Focus::Format => Focus::Schedule,
            Focus::Schedule => Focus::Name,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Focus::Name => Focus::Schedule,
            Focus::DateTime => Focus::Name,
            Focus::Format => Focus::DateTime,
            Focus::Schedule => Focus::Format,
        }
    }

    /// Whether typed characters go into a text field
    #[must_use]
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Name | Focus::DateTime)
    }
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    pub name_input: String,
    pub datetime_input: String,
    pub selected_format: FormatCode,
    pub schedule: Schedule,
    pub selected_entry: usize,
    pub schedule_list_state: ListState,
    pub error_message: Option<String>,
    pub toasts: ToastBoard,
    pub show_help: bool,          // Toggle for help panel
    pub help_scroll_offset: usize, // Scroll position for help panel
    pub engine: FormatEngine<PatternFormatter>,
    pub zone: Zone,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    /// Create a new App instance with the date/time field set to the current minute
    #[must_use]
    pub fn new(
        engine: FormatEngine<PatternFormatter>,
        default_format: FormatCode,
        toast_duration: Duration,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let zone = engine.locale().zone();
        let mut schedule_list_state = ListState::default();
        schedule_list_state.select(None);

        Self {
            should_quit: false,
            focus: Focus::Name,
            name_input: String::new(),
            datetime_input: datetime::format_now_input(zone),
            selected_format: default_format,
            schedule: Schedule::new(),
            selected_entry: 0,
            schedule_list_state,
            error_message: None,
            toasts: ToastBoard::new(toast_duration),
            show_help: false,
            help_scroll_offset: 0,
            engine,
            zone,
            clipboard,
        }
    }

    /// Build the app from configuration
    pub fn from_config(config: &Config, clipboard: Box<dyn ClipboardSink>) -> anyhow::Result<Self> {
        let engine = FormatEngine::new(config.display.formatter()?);
        Ok(Self::new(
            engine,
            config.ui.default_format(),
            config.ui.toast_duration(),
            clipboard,
        ))
    }

    /// Moment currently entered in the form, `None` when the field is empty
    pub fn current_moment(&self) -> Result<Option<i64>, ScheduleError> {
        Ok(datetime::parse_moment(&self.datetime_input, self.zone)?)
    }

    /// Preview of every format for the form's moment (or now, when the field is empty)
    pub fn format_previews(&self, now: DateTime<Utc>) -> Vec<(FormatCode, String)> {
        let moment = match self.current_moment() {
            Ok(Some(moment)) => moment,
            Ok(None) => now.timestamp(),
            Err(e) => {
                let message = e.to_string();
                return FormatCode::ALL.into_iter().map(|code| (code, message.clone())).collect();
            }
        };

        FormatCode::ALL
            .into_iter()
            .map(|code| {
                let preview = self
                    .engine
                    .render(moment, code, now)
                    .unwrap_or_else(|e| e.to_string());
                (code, preview)
            })
            .collect()
    }

    /// Live rendering of the schedule entry at `index`
    pub fn entry_preview(&self, index: usize, now: DateTime<Utc>) -> String {
        self.schedule
            .render_entry(index, &self.engine, now)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Validate the form and append a new schedule entry
    pub fn add_to_schedule(&mut self) -> Result<TimestampToken, ScheduleError> {
        let result = self
            .current_moment()
            .and_then(|moment| {
                self.schedule
                    .add_entry(&self.name_input, moment, self.selected_format)
                    .map(|entry| entry.token)
            });

        match result {
            Ok(token) => {
                self.name_input.clear();
                self.error_message = None;
                self.toasts.notify(SUCCESS_ENTRY_ADDED, None);
                self.select_entry(self.schedule.len() - 1);
                Ok(token)
            }
            Err(e) => {
                self.error_message = Some(format!("❌ {e}"));
                Err(e)
            }
        }
    }

    /// Add the form's timestamp to the schedule and copy its token
    ///
    /// A failed copy leaves the new entry in place.
    pub async fn add_and_copy(&mut self) -> Result<TimestampToken, ScheduleError> {
        let token = self.add_to_schedule()?;
        self.copy_text(&token.to_string(), ERROR_COPY_FAILED).await;
        Ok(token)
    }

    /// Copy the selected entry's token
    pub async fn copy_selected(&mut self) {
        let Some(entry) = self.schedule.get(self.selected_entry) else {
            self.error_message = Some(ERROR_SCHEDULE_EMPTY.to_string());
            return;
        };
        let token = entry.token.to_string();
        self.copy_text(&token, ERROR_COPY_FAILED).await;
    }

    /// Copy the whole numbered schedule
    pub async fn copy_schedule(&mut self) {
        if self.schedule.is_empty() {
            self.error_message = Some(ERROR_SCHEDULE_EMPTY.to_string());
            return;
        }
        let listing = self.schedule.export_all();
        self.copy_text(&listing, ERROR_COPY_ALL_FAILED).await;
    }

    /// Write to the clipboard and report the outcome
    async fn copy_text(&mut self, text: &str, failure_message: &str) {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.error_message = None;
                self.toasts.notify(SUCCESS_COPIED, None);
            }
            Err(e) => {
                log::error!("{failure_message}: {e}");
                self.error_message = Some(format!("{failure_message}: {e}"));
            }
        }
    }

    /// Delete the selected entry
    pub fn delete_selected(&mut self) {
        match self.schedule.remove_entry(self.selected_entry) {
            Ok(_) => {
                self.toasts.notify(SUCCESS_ENTRY_DELETED, None);
                let last = self.schedule.len().saturating_sub(1);
                self.select_entry(self.selected_entry.min(last));
            }
            Err(e) => self.error_message = Some(format!("❌ {e}")),
        }
    }

    /// Move the selected entry one position up; no-op on the first row
    pub fn move_selected_up(&mut self) {
        if self.can_move_up() && self.schedule.move_up(self.selected_entry).is_ok() {
            self.select_entry(self.selected_entry - 1);
        }
    }

    /// Move the selected entry one position down; no-op on the last row
    pub fn move_selected_down(&mut self) {
        if self.can_move_down() && self.schedule.move_down(self.selected_entry).is_ok() {
            self.select_entry(self.selected_entry + 1);
        }
    }

    pub fn can_move_up(&self) -> bool {
        self.selected_entry > 0 && self.selected_entry < self.schedule.len()
    }

    pub fn can_move_down(&self) -> bool {
        self.selected_entry + 1 < self.schedule.len()
    }

    /// Select the next schedule entry
    pub fn next_entry(&mut self) {
        if self.selected_entry + 1 < self.schedule.len() {
            self.select_entry(self.selected_entry + 1);
        }
    }

    /// Select the previous schedule entry
    pub fn previous_entry(&mut self) {
        if self.selected_entry > 0 {
            self.select_entry(self.selected_entry - 1);
        }
    }

    fn select_entry(&mut self, index: usize) {
        self.selected_entry = index;
        self.schedule_list_state
            .select(if self.schedule.is_empty() { None } else { Some(index) });
    }

    pub fn next_format(&mut self) {
        self.selected_format = self.selected_format.next();
    }

    pub fn previous_format(&mut self) {
        self.selected_format = self.selected_format.previous();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused text field
    pub fn add_char(&mut self, c: char) {
        match self.focus {
            Focus::Name => self.name_input.push(c),
            Focus::DateTime => self.datetime_input.push(c),
            Focus::Format | Focus::Schedule => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn remove_char(&mut self) {
        match self.focus {
            Focus::Name => {
                self.name_input.pop();
            }
            Focus::DateTime => {
                self.datetime_input.pop();
            }
            Focus::Format | Focus::Schedule => {}
        }
    }

    /// Reset the date/time field to the current minute
    pub fn reset_datetime(&mut self) {
        self.datetime_input = datetime::format_now_input(self.zone);
    }

    /// Expire old notifications
    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    pub fn dismiss_messages(&mut self) {
        self.error_message = None;
        self.toasts.clear();
    }
}
