//! Display format selector with live previews

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::super::app::{App, Focus};
use super::common::create_panel_block;

/// Lists every format code next to how the form's moment would look in it
pub struct FormatPicker;

impl FormatPicker {
    /// Render the format picker
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let previews = app.format_previews(Utc::now());

        let items: Vec<ListItem> = previews
            .into_iter()
            .map(|(code, preview)| {
                let marker = if code == app.selected_format { "● " } else { "○ " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{code} "), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::styled(format!("{:<16}", code.label()), Style::default().fg(Color::Gray)),
                    Span::raw(preview),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(create_panel_block(" 🎨 Display Format ".to_string(), app.focus == Focus::Format))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

        let mut state = ListState::default();
        state.select(Some(app.selected_format.index()));
        f.render_stateful_widget(list, area, &mut state);
    }
}
