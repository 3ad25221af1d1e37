//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::roster::UserRecord;

use super::event::{Event, EventHandler};
use super::input::{handle_key, handle_mouse, KeyAction};
use super::pager::PagedTable;
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over the full record set. The records are captured
    /// once; filtering and pagination only ever toggle what is shown.
    pub fn new(records: Vec<UserRecord>, rows_per_page: usize) -> Self {
        let table = PagedTable::new(records).with_rows_per_page(rows_per_page);
        Self {
            state: AppState::new(table),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal (mouse capture: pagination links are clickable)
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);

        tracing::info!(
            records = self.state.table.total_len(),
            rows_per_page = self.state.table.rows_per_page(),
            "starting roster view"
        );

        // Main loop
        loop {
            // Draw UI
            terminal.draw(|frame| render(frame, &mut self.state))?;

            // Handle events
            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    handle_mouse(&mut self.state, mouse);
                }
                Ok(Event::Resize(_, _)) => {
                    // Next draw picks up the new frame size.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }
}
