//! Terminal User Interface module
//!
//! Handles the single-panel star search TUI

pub mod app;
pub mod events;
pub mod highlighter;
pub mod ui;

use crate::constants::EVENT_POLL_MILLIS;
use crate::{Result, StarSearchError};
use app::App;
use crossterm::event::Event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use events::EventHandler;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive loop until the user quits
pub fn run(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app);
    // Restore the terminal even if the loop failed
    let restored = restore_terminal(&mut terminal);
    outcome.and(restored)
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| StarSearchError::terminal_error(&e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StarSearchError::terminal_error(&e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| StarSearchError::terminal_error(&e.to_string()))
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| StarSearchError::terminal_error(&e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| StarSearchError::terminal_error(&e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| StarSearchError::terminal_error(&e.to_string()))
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let handler = EventHandler::new()?;
    let poll_timeout = Duration::from_millis(EVENT_POLL_MILLIS);

    while !app.should_quit {
        app.drain_outcomes();

        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| StarSearchError::TuiError(format!("Draw failed: {}", e)))?;

        if let Some(Event::Key(key)) = handler.next_event(poll_timeout)? {
            let action = handler.handle_key_event(key, app.key_context());
            crate::logging::trace_log(&format!("Key {:?} -> {:?}", key.code, action));
            app.handle_action(action);
        }
    }

    crate::logging::info_log("Quit requested, leaving event loop");
    Ok(())
}
