//! Event name and date/time inputs

use ratatui::{layout::Rect, Frame};

use super::super::app::{App, Focus};
use super::super::layout::LayoutManager;
use super::common::create_input_paragraph;
use crate::constants::PLACEHOLDER_NAME;
use crate::utils::datetime::DATETIME_INPUT_FORMAT;

/// Form row with the event name and date/time fields
pub struct FormPanel;

impl FormPanel {
    /// Render both input fields
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let chunks = LayoutManager::form_layout(area);

        let name = create_input_paragraph(&app.name_input, "📝 Event Name", PLACEHOLDER_NAME, app.focus == Focus::Name);
        f.render_widget(name, chunks[0]);

        let datetime_title = format!("📅 Date & Time ({})", app.zone);
        let datetime = create_input_paragraph(
            &app.datetime_input,
            &datetime_title,
            DATETIME_INPUT_FORMAT,
            app.focus == Focus::DateTime,
        );
        f.render_widget(datetime, chunks[1]);
    }
}
