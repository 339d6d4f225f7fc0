//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

const HELP_CONTENT: &str = r"
EVENT TIMESTAMP GENERATOR
=========================

Builds Discord timestamp tokens such as <t:1700000000:F>
and keeps an ordered schedule of them.

FORM
----
Tab / S-Tab Move between name, date/time, format, schedule
Type        Edit the focused field
Backspace   Delete the last character
Delete      Reset date/time to now
Enter       Add to schedule
Ctrl+Y      Add to schedule and copy the token

DATE & TIME
-----------
YYYY-MM-DDTHH:MM      e.g. 2025-01-15T14:30
YYYY-MM-DD HH:MM:SS   seconds are optional

DISPLAY FORMAT
--------------
↑↓ / ←→     Cycle formats
1-7         Pick a format directly
t  Short Time          T  Long Time
d  Short Date          D  Long Date
f  Short Date/Time     F  Long Date/Time
R  Relative Time

SCHEDULE
--------
j/k         Select entry (down/up)
K/J         Move entry up/down
c / Enter   Copy entry token
y           Copy the whole schedule
d / Delete  Delete entry

GENERAL CONTROLS
----------------
F1 / ?      Toggle help panel
Esc         Dismiss messages
q           Quit (outside text fields)
Ctrl+C      Quit application

HELP PANEL SCROLLING
--------------------
↑↓          Scroll help content up/down
Home        Jump to top of help
End         Jump to bottom of help

Press 'Esc' or '?' to close this help panel
";

/// Largest scroll offset that still shows the last help line
pub fn max_scroll_offset() -> usize {
    HELP_CONTENT.lines().count().saturating_sub(1)
}

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &mut App) {
        // Adaptive help panel size based on terminal size
        let screen = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen.width, screen.height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, screen);
        f.render_widget(Clear, help_area);

        // Apply scroll offset to the content
        let lines: Vec<&str> = HELP_CONTENT.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_area.height.saturating_sub(2) as usize; // Account for borders

        // Clamp scroll offset to valid range
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = app.help_scroll_offset.min(max_scroll);
        app.help_scroll_offset = scroll_offset;

        let help_text = lines
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        let help_paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("❓ HELP - {}/{} lines", scroll_offset + 1, total_lines))
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        f.render_widget(help_paragraph, help_area);
    }
}
