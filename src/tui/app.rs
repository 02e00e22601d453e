//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::data::Dataset;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, Mode};

/// Main TUI application.
pub struct App {
    dataset: Dataset,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates the app with the loaded dataset and the initial mode.
    pub fn new(dataset: Dataset, mode: Mode, selected_country: Option<String>) -> Self {
        let state = AppState::new(&dataset, mode, selected_country);
        Self {
            dataset,
            state,
            should_quit: false,
        }
    }

    /// Runs the dashboard until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state, &self.dataset))?;

            match events.next() {
                Ok(Event::Tick) => self.state.tick(),
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, &self.dataset, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                // The next draw reads the new size from the backend.
                Ok(Event::Resize(_, _)) => {}
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
