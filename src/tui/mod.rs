//! Terminal User Interface (TUI) for transly.
//!
//! Two panes: type on the left, read the translation on the right. Language
//! selectors and help are keyboard-driven overlays.

mod app;
mod event;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use event::{Event, EventHandler};
pub use theme::Palette;

use crate::config::Config;
use crate::theme::ThemeStore;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tokio::runtime::Handle;
use tracing::{debug, error, info};

/// Run the TUI application.
pub fn run(handle: Handle, config: &Config, store: ThemeStore) -> AppResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting transly TUI");

    let event_handler = EventHandler::new(50); // 50ms tick rate
    let mut app = App::new(handle, event_handler.sender(), config, store);
    let result = run_app(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("TUI error: {}", e);
    }

    result
}

/// Main application loop.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> AppResult<()> {
    while app.is_running() {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle events
        match event_handler.next()? {
            Event::Tick => {
                app.on_tick();
            }
            Event::Key(key_event) => {
                app.on_key(key_event);
            }
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
            }
            Event::Translated { seq, result } => {
                app.on_translated(seq, result);
            }
        }
    }

    Ok(())
}
