//! Event handling and key bindings

use super::app::{App, Focus};
use super::components::help_panel::max_scroll_offset;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Global shortcuts
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c' | 'q') => {
                        app.should_quit = true;
                        return Ok(true);
                    }
                    KeyCode::Char('y') => {
                        let _ = app.add_and_copy().await;
                        return Ok(true);
                    }
                    _ => {}
                }
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            match key.code {
                KeyCode::F(1) => {
                    app.show_help = true;
                    return Ok(true);
                }
                KeyCode::Tab => {
                    app.focus_next();
                    return Ok(true);
                }
                KeyCode::BackTab => {
                    app.focus_previous();
                    return Ok(true);
                }
                KeyCode::Esc => {
                    app.dismiss_messages();
                    return Ok(true);
                }
                _ => {}
            }

            match app.focus {
                Focus::Name | Focus::DateTime => Ok(handle_text_input(key, app)),
                Focus::Format => Ok(handle_format_picker(key, app)),
                Focus::Schedule => handle_schedule(key, app).await,
            }
        }
        Event::Mouse(_) if app.show_help => Ok(false),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => {
                app.previous_entry();
                Ok(true)
            }
            MouseEventKind::ScrollDown => {
                app.next_entry();
                Ok(true)
            }
            _ => Ok(false),
        },
        _ => Ok(false),
    }
}

/// Handle events when help panel is open
fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = (app.help_scroll_offset + 1).min(max_scroll_offset());
            true
        }
        KeyCode::PageUp => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(10);
            true
        }
        KeyCode::PageDown => {
            app.help_scroll_offset = (app.help_scroll_offset + 10).min(max_scroll_offset());
            true
        }
        KeyCode::Home => {
            app.help_scroll_offset = 0;
            true
        }
        KeyCode::End => {
            app.help_scroll_offset = max_scroll_offset();
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events while the name or date/time field is focused
fn handle_text_input(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.add_char(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char();
            true
        }
        KeyCode::Delete if app.focus == Focus::DateTime => {
            app.reset_datetime();
            true
        }
        KeyCode::Enter => {
            let _ = app.add_to_schedule();
            true
        }
        KeyCode::Down => {
            app.focus_next();
            true
        }
        KeyCode::Up => {
            app.focus_previous();
            true
        }
        _ => false,
    }
}

/// Handle events while the format picker is focused
fn handle_format_picker(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j' | 'l') => {
            app.next_format();
            true
        }
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k' | 'h') => {
            app.previous_format();
            true
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            app.selected_format = crate::timestamp::FormatCode::ALL[index];
            true
        }
        KeyCode::Enter => {
            let _ = app.add_to_schedule();
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        _ => false,
    }
}

/// Handle events while the schedule list is focused
async fn handle_schedule(key: KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_entry();
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_entry();
            Ok(true)
        }
        KeyCode::Char('K') => {
            app.move_selected_up();
            Ok(true)
        }
        KeyCode::Char('J') => {
            app.move_selected_down();
            Ok(true)
        }
        KeyCode::Char('c') | KeyCode::Enter => {
            app.copy_selected().await;
            Ok(true)
        }
        KeyCode::Char('y') => {
            app.copy_schedule().await;
            Ok(true)
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
            Ok(true)
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            Ok(true)
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        _ => Ok(false),
    }
}
