//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Instant;

use super::app::App;
use super::components::{FormPanel, FormatPicker, HelpPanel, ScheduleList, StatusBar};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::clipboard::Osc52Clipboard;
use crate::config::Config;
use crate::constants::APP_TITLE;

/// Run the main TUI application
pub async fn run_app(config: &Config) -> Result<()> {
    // Create application state before touching the terminal so config errors print normally
    let mut app = App::from_config(config, Box::new(Osc52Clipboard::stdout()))?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(APP_TITLE))?;
    } else {
        execute!(stdout, EnterAlternateScreen, SetTitle(APP_TITLE))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    log::info!("Starting UI (zone: {}, format: {})", app.zone, app.selected_format);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, config).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let tick_rate = config.ui.tick_rate();

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so relative previews keep refreshing without input
        if event::poll(tick_rate)? {
            let _handled = handle_events(event::read()?, app).await?;
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());

    FormPanel::render(f, chunks[0], app);
    FormatPicker::render(f, chunks[1], app);
    ScheduleList::render(f, chunks[2], app);
    StatusBar::render(f, chunks[3], app);

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
