//! Schedule list component

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::super::app::{App, Focus};
use super::common::create_panel_block;
use crate::constants::EMPTY_SCHEDULE_HINT;

/// Schedule list component
pub struct ScheduleList;

impl ScheduleList {
    /// Render the schedule, one three-line item per entry
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let focused = app.focus == Focus::Schedule;
        let title = format!(" 🗓 Schedule ({}) ", app.schedule.len());

        if app.schedule.is_empty() {
            let empty_list = List::new(vec![ListItem::new(Span::styled(
                EMPTY_SCHEDULE_HINT,
                Style::default().fg(Color::DarkGray),
            ))])
            .block(create_panel_block(title, focused));
            f.render_widget(empty_list, area);
            return;
        }

        let now = Utc::now();
        let last = app.schedule.len() - 1;
        let items: Vec<ListItem> = app
            .schedule
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let arrows = format!(
                    "{}{} ",
                    if index > 0 { "↑" } else { " " },
                    if index < last { "↓" } else { " " }
                );
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(arrows, Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            format!("{}. {}", index + 1, entry.name),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", entry.token),
                        Style::default().fg(Color::Cyan),
                    )),
                    Line::from(Span::styled(
                        format!("   {}", app.entry_preview(index, now)),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(create_panel_block(title, focused))
            .highlight_style(if focused {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            });

        f.render_stateful_widget(list, area, &mut app.schedule_list_state.clone());
    }
}
