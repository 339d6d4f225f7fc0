//! Logging
//!
//! `log` macros are routed through a `fern` dispatcher into a [`Logger`], which appends
//! them to a log file when logging is enabled in the configuration. Nothing is written
//! to the terminal so the TUI stays intact.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Shared logger that can be used across the application
#[derive(Clone, Default)]
pub struct Logger {
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl Logger {
    /// Logger that writes to the log file when `enabled`, and discards lines otherwise
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::default());
        }
        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok(Self {
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Whether lines are persisted to the log file
    pub fn is_enabled(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: &str) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                let _ = writeln!(writer, "[{}] {}", timestamp, message);
            }
        }
    }

    /// Flush buffered file output
    pub fn flush(&self) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }

    /// Route the `log` facade into this logger
    ///
    /// A disabled logger installs with `LevelFilter::Off` so log macros cost nothing.
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let level = if self.is_enabled() { level } else { log::LevelFilter::Off };
        let sink = self.clone();
        fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{} {}: {}", record.level(), record.target(), message)))
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(&record.args().to_string())))
            .apply()
            .context("Failed to install logger")
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        Ok(base.join(APP_NAME).join(LOG_FILE_NAME))
    }
}
