//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Instant;

use super::super::app::{App, Focus};
use super::common::{create_instructions_paragraph, shortcuts};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: validation errors first, then toasts, then shortcuts
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        if let Some(error) = &app.error_message {
            let status_bar = Paragraph::new(error.as_str())
                .block(Block::default())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red));
            f.render_widget(status_bar, area);
            return;
        }

        if let Some(toast) = app.toasts.visible(Instant::now()) {
            let status_bar = Paragraph::new(toast.message.as_str())
                .block(Block::default())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green));
            f.render_widget(status_bar, area);
            return;
        }

        let instructions = match app.focus {
            Focus::Schedule => vec![
                shortcuts::MOVE,
                shortcuts::SEPARATOR,
                shortcuts::COPY,
                shortcuts::SEPARATOR,
                shortcuts::COPY_ALL,
                shortcuts::SEPARATOR,
                shortcuts::DELETE,
                shortcuts::SEPARATOR,
                shortcuts::HELP,
                shortcuts::SEPARATOR,
                shortcuts::QUIT,
            ],
            Focus::Name | Focus::DateTime | Focus::Format => vec![
                shortcuts::TAB_FOCUS,
                shortcuts::SEPARATOR,
                shortcuts::ENTER_ADD,
                shortcuts::SEPARATOR,
                shortcuts::CTRL_Y_ADD_COPY,
                shortcuts::SEPARATOR,
                shortcuts::HELP,
                shortcuts::SEPARATOR,
                shortcuts::QUIT,
            ],
        };
        f.render_widget(create_instructions_paragraph(&instructions), area);
    }
}
