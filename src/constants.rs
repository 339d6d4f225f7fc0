//! Constants used throughout the application
//!
//! This module centralizes UI text, messages, and limits so they stay
//! consistent between the TUI and the CLI.

// Application
pub const APP_NAME: &str = "etg";
pub const APP_TITLE: &str = "⏱ Event Timestamp Generator";
pub const CONFIG_FILE_NAME: &str = "etg.toml";
pub const LOG_FILE_NAME: &str = "etg.log";

// Schedule
/// Name given to entries created without one
pub const DEFAULT_ENTRY_NAME: &str = "Unnamed";

// Success Messages
pub const SUCCESS_COPIED: &str = "Copied to clipboard!";
pub const SUCCESS_ENTRY_ADDED: &str = "✅ Added to schedule";
pub const SUCCESS_ENTRY_DELETED: &str = "✅ Entry deleted";

// Error Messages
pub const ERROR_COPY_FAILED: &str = "❌ Failed to copy";
pub const ERROR_COPY_ALL_FAILED: &str = "❌ Failed to copy schedule";
pub const ERROR_SCHEDULE_EMPTY: &str = "❌ The schedule is empty";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const EMPTY_SCHEDULE_HINT: &str = "No entries yet. Fill in the form and press Enter to add one.";
pub const PLACEHOLDER_NAME: &str = "e.g. Product Launch";

// Defaults
/// How long a toast stays visible
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;
/// Upper bound for a configured toast duration
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;
/// Redraw interval; keeps relative previews current
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const MIN_TICK_RATE_MS: u64 = 16;
pub const MAX_TICK_RATE_MS: u64 = 5000;
