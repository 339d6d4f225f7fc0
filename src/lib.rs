//! Event Timestamp Generator - Discord timestamp tokens from the terminal
//!
//! This library turns a local date and time into a `<t:UNIX:FORMAT>` token, renders
//! tokens the way the Discord client displays them, and keeps an ordered schedule of
//! named tokens behind a terminal interface.
//!
//! # Modules
//!
//! * [`timestamp`] - Format engine: token codec, absolute and relative rendering
//! * [`schedule`] - Ordered list of named timestamp entries
//! * [`clipboard`] - Clipboard sinks
//! * [`notification`] - Toast notifications
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`cli`] - Command line subcommands
//! * [`utils`] - Utility functions and helpers

/// Command line interface
pub mod cli;

/// Clipboard sinks used by copy actions
pub mod clipboard;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Fire-and-forget user notifications
pub mod notification;

/// Ordered schedule of named timestamps
pub mod schedule;

/// Timestamp format engine
pub mod timestamp;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time input handling
pub mod utils;

pub use schedule::{Schedule, ScheduleEntry, ScheduleError};
pub use timestamp::{FormatCode, FormatEngine, TimestampError, TimestampToken};
