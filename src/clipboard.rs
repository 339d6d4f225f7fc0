//! Clipboard sinks
//!
//! Copying is the only asynchronous operation in the application. Failures are
//! reported to the user and never undo the schedule change that preceded them.

use async_trait::async_trait;
use crossterm::clipboard::CopyToClipboard;
use crossterm::Command;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Clipboard write failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to copy to clipboard: {0}")]
    WriteFailed(String),
}

/// Write-only clipboard
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through the terminal with an OSC 52 escape sequence.
///
/// Works over SSH and inside tmux (with `set-clipboard on`), as long as the terminal
/// emulator honours OSC 52.
pub struct Osc52Clipboard<W> {
    writer: tokio::sync::Mutex<W>,
}

impl Osc52Clipboard<tokio::io::Stdout> {
    /// Clipboard bound to the process's standard output
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: tokio::sync::Mutex::new(writer),
        }
    }

    /// Hand back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

/// The OSC 52 escape sequence that places `text` on the system clipboard
pub fn osc52_sequence(text: &str) -> Result<String, ClipboardError> {
    let mut sequence = String::new();
    CopyToClipboard::to_clipboard_from(text.as_bytes())
        .write_ansi(&mut sequence)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
    Ok(sequence)
}

#[async_trait]
impl<W> ClipboardSink for Osc52Clipboard<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let sequence = osc52_sequence(text)?;
        let mut writer = self.writer.lock().await;
        writer
            .write_all(sequence.as_bytes())
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        writer
            .flush()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        log::debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}

/// Keeps copied text in memory; used headless and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent copy, if any
    pub fn last(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|contents| contents.last().cloned())
    }

    /// Every copy in the order it happened
    pub fn history(&self) -> Vec<String> {
        self.contents.lock().map(|contents| contents.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ClipboardSink for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        contents.push(text.to_string());
        Ok(())
    }
}
