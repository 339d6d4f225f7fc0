use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

use etg::clipboard::{ClipboardError, ClipboardSink, MemoryClipboard};
use etg::constants::{SUCCESS_COPIED, SUCCESS_ENTRY_ADDED};
use etg::schedule::ScheduleError;
use etg::timestamp::{FormatCode, FormatEngine, PatternFormatter};
use etg::ui::components::help_panel::max_scroll_offset;
use etg::ui::{handle_events, App, Focus};

struct FailingClipboard;

#[async_trait]
impl ClipboardSink for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::WriteFailed("permission denied".to_string()))
    }
}

fn app_with(clipboard: Box<dyn ClipboardSink>) -> App {
    App::new(
        FormatEngine::new(PatternFormatter::utc()),
        FormatCode::LongDateTime,
        Duration::from_millis(2000),
        clipboard,
    )
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_new_app_prefills_datetime() {
    let app = app_with(Box::new(MemoryClipboard::new()));
    assert_eq!(app.focus, Focus::Name);
    assert_eq!(app.selected_format, FormatCode::LongDateTime);
    assert!(app.current_moment().unwrap().is_some());
    assert!(app.schedule.is_empty());
}

#[test]
fn test_add_to_schedule_clears_name() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    app.name_input = "Launch".to_string();
    app.datetime_input = "2023-11-14T22:13:20".to_string();

    let token = app.add_to_schedule().unwrap();
    assert_eq!(token.to_string(), "<t:1700000000:F>");
    assert!(app.name_input.is_empty());
    assert_eq!(app.schedule.get(0).unwrap().name, "Launch");
    assert_eq!(app.schedule_list_state.selected(), Some(0));
    assert!(app.error_message.is_none());
}

#[test]
fn test_add_without_datetime_reports_error() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    app.datetime_input.clear();
    app.name_input = "Launch".to_string();

    assert_eq!(app.add_to_schedule().unwrap_err(), ScheduleError::MissingDateTime);
    assert!(app.schedule.is_empty());
    assert_eq!(app.name_input, "Launch");
    assert!(app.error_message.as_deref().unwrap().contains("select a date and time"));
}

#[test]
fn test_add_with_garbage_datetime_reports_error() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    app.datetime_input = "soon".to_string();

    assert!(matches!(app.add_to_schedule(), Err(ScheduleError::Timestamp(_))));
    assert!(app.schedule.is_empty());
    assert!(app.error_message.is_some());
}

#[tokio::test]
async fn test_add_and_copy_copies_token() {
    let clipboard = MemoryClipboard::new();
    let mut app = app_with(Box::new(clipboard.clone()));
    app.datetime_input = "2023-11-14T22:13:20".to_string();
    app.selected_format = FormatCode::Relative;

    app.add_and_copy().await.unwrap();
    assert_eq!(clipboard.last().as_deref(), Some("<t:1700000000:R>"));
    assert_eq!(app.toasts.visible(Instant::now()).unwrap().message, SUCCESS_COPIED);
}

#[tokio::test]
async fn test_failed_copy_keeps_new_entry() {
    let mut app = app_with(Box::new(FailingClipboard));
    app.datetime_input = "2023-11-14T22:13:20".to_string();

    assert!(app.add_and_copy().await.is_ok());
    assert_eq!(app.schedule.len(), 1);
    assert!(app.error_message.as_deref().unwrap().contains("permission denied"));
    assert_eq!(app.toasts.visible(Instant::now()).unwrap().message, SUCCESS_ENTRY_ADDED);
}

#[tokio::test]
async fn test_copy_schedule_exports_listing() {
    let clipboard = MemoryClipboard::new();
    let mut app = app_with(Box::new(clipboard.clone()));

    app.copy_schedule().await;
    assert!(clipboard.last().is_none());
    assert!(app.error_message.is_some());

    app.datetime_input = "1970-01-01T00:00:01".to_string();
    app.selected_format = FormatCode::ShortTime;
    app.name_input = "X".to_string();
    app.add_to_schedule().unwrap();
    app.datetime_input = "1970-01-01T00:00:02".to_string();
    app.selected_format = FormatCode::ShortDate;
    app.name_input = "Y".to_string();
    app.add_to_schedule().unwrap();

    app.copy_schedule().await;
    assert_eq!(clipboard.last().as_deref(), Some("1. X - <t:1:t>\n2. Y - <t:2:d>"));

    app.copy_selected().await;
    assert_eq!(clipboard.last().as_deref(), Some("<t:2:d>"));
}

#[test]
fn test_move_and_delete_selection() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    for name in ["A", "B", "C"] {
        app.name_input = name.to_string();
        app.add_to_schedule().unwrap();
    }
    assert_eq!(app.selected_entry, 2);
    assert!(!app.can_move_down());

    app.move_selected_down();
    assert_eq!(app.selected_entry, 2);

    app.move_selected_up();
    assert_eq!(app.selected_entry, 1);
    assert_eq!(app.schedule.export_all().lines().nth(1).unwrap().split(" - ").next(), Some("2. C"));

    app.previous_entry();
    assert!(!app.can_move_up());
    app.move_selected_up();
    assert_eq!(app.selected_entry, 0);

    app.delete_selected();
    app.delete_selected();
    app.delete_selected();
    assert!(app.schedule.is_empty());
    assert_eq!(app.schedule_list_state.selected(), None);

    app.delete_selected();
    assert!(app.error_message.is_some());
}

#[test]
fn test_format_previews_follow_form() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    app.datetime_input = "2023-11-14T22:13:20".to_string();
    let now = Utc.timestamp_opt(1_700_000_000 - 7_200, 0).unwrap();

    let previews = app.format_previews(now);
    assert_eq!(previews.len(), 7);
    assert_eq!(previews[3], (FormatCode::LongDate, "November 14, 2023".to_string()));
    assert_eq!(previews[6], (FormatCode::Relative, "in 2 hours".to_string()));

    app.datetime_input = "nope".to_string();
    assert!(app.format_previews(now).iter().all(|(_, text)| text.starts_with("Invalid moment")));
}

#[tokio::test]
async fn test_key_events_drive_the_form() {
    let clipboard = MemoryClipboard::new();
    let mut app = app_with(Box::new(clipboard.clone()));

    for c in "Demo".chars() {
        handle_events(key(KeyCode::Char(c)), &mut app).await.unwrap();
    }
    assert_eq!(app.name_input, "Demo");

    handle_events(key(KeyCode::Tab), &mut app).await.unwrap();
    assert_eq!(app.focus, Focus::DateTime);
    app.datetime_input.clear();
    for c in "2023-11-14T22:13".chars() {
        handle_events(key(KeyCode::Char(c)), &mut app).await.unwrap();
    }

    handle_events(key(KeyCode::Tab), &mut app).await.unwrap();
    assert_eq!(app.focus, Focus::Format);
    handle_events(key(KeyCode::Char('7')), &mut app).await.unwrap();
    assert_eq!(app.selected_format, FormatCode::Relative);

    handle_events(key(KeyCode::Enter), &mut app).await.unwrap();
    assert_eq!(app.schedule.get(0).unwrap().token.to_string(), "<t:1699999980:R>");

    handle_events(key(KeyCode::Tab), &mut app).await.unwrap();
    assert_eq!(app.focus, Focus::Schedule);
    handle_events(key(KeyCode::Char('c')), &mut app).await.unwrap();
    assert_eq!(clipboard.last().as_deref(), Some("<t:1699999980:R>"));

    handle_events(
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        &mut app,
    )
    .await
    .unwrap();
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_help_panel_scroll_is_bounded() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    handle_events(key(KeyCode::F(1)), &mut app).await.unwrap();
    assert!(app.show_help);

    handle_events(key(KeyCode::End), &mut app).await.unwrap();
    let last = max_scroll_offset();
    assert_eq!(app.help_scroll_offset, last);

    handle_events(key(KeyCode::Down), &mut app).await.unwrap();
    handle_events(key(KeyCode::PageDown), &mut app).await.unwrap();
    assert_eq!(app.help_scroll_offset, last);

    handle_events(key(KeyCode::Up), &mut app).await.unwrap();
    assert_eq!(app.help_scroll_offset, last - 1);

    handle_events(key(KeyCode::Home), &mut app).await.unwrap();
    assert_eq!(app.help_scroll_offset, 0);
}

#[tokio::test]
async fn test_mouse_scroll_ignored_while_help_open() {
    let mut app = app_with(Box::new(MemoryClipboard::new()));
    for name in ["A", "B"] {
        app.name_input = name.to_string();
        app.add_to_schedule().unwrap();
    }
    assert_eq!(app.selected_entry, 1);

    let scroll_up = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollUp,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });

    app.show_help = true;
    assert!(!handle_events(scroll_up.clone(), &mut app).await.unwrap());
    assert_eq!(app.selected_entry, 1);

    app.show_help = false;
    assert!(handle_events(scroll_up, &mut app).await.unwrap());
    assert_eq!(app.selected_entry, 0);
}
