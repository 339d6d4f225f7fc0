//! Toast notifications
//!
//! Short, purely informational messages. Senders never wait for or depend on them.

use std::time::{Duration, Instant};

/// Fire-and-forget notification sink
pub trait Notifier {
    fn notify(&mut self, message: &str, duration: Option<Duration>);
}

/// A message shown until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// Holds the toast currently on screen; a new toast replaces the old one
#[derive(Debug, Clone)]
pub struct ToastBoard {
    current: Option<Toast>,
    default_duration: Duration,
}

impl ToastBoard {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
        }
    }

    /// The toast to display at `now`, if it has not expired
    pub fn visible(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|toast| toast.expires_at > now)
    }

    /// Drop the toast once it has expired
    pub fn prune(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl Notifier for ToastBoard {
    fn notify(&mut self, message: &str, duration: Option<Duration>) {
        let duration = duration.unwrap_or(self.default_duration);
        self.current = Some(Toast {
            message: message.to_string(),
            expires_at: Instant::now() + duration,
        });
    }
}

/// Sends notifications to standard error and the log, for non-interactive use
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str, _duration: Option<Duration>) {
        log::info!("{message}");
        eprintln!("{message}");
    }
}
