//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod controls;
pub mod grid;
mod help;
mod layout;
mod search_bar;
mod styles;
mod table;

pub use grid::{Cell, Grid, GridRow, project};
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::state::{AppState, FocusPane};
use constants::POLL_INTERVAL_MS;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(state: AppState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let key_bindings = KeyBindings::default();
        let palette = Palette::new(colors);

        Ok(Self {
            terminal,
            state,
            key_bindings,
            palette,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Event-driven: redraws only
    /// on user input or resize; idle polling consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(POLL_INTERVAL_MS);

        // Initial render so the screen has content immediately
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay captures keys while visible: toggle keys close it,
        // quit still works, everything else is ignored
        if self.state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.state.toggle_help(),
                KeyCode::Char('q') => self.state.quit(),
                _ => {}
            }
            return self.state.should_quit;
        }

        // Character input while the search box has focus goes to the box,
        // not to the key bindings
        if self.state.focus == FocusPane::Search {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.insert_search_char(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.state.search_backspace();
                    return false;
                }
                KeyCode::Left => {
                    self.state.search_cursor_left();
                    return false;
                }
                KeyCode::Right => {
                    self.state.search_cursor_right();
                    return false;
                }
                KeyCode::Esc | KeyCode::Enter => {
                    self.state.leave_search();
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        self.state.apply(action);
        self.state.should_quit
    }

    /// Render the current state to the terminal
    fn draw(&mut self) -> Result<(), TuiError> {
        let palette = self.palette;
        self.terminal
            .draw(|frame| layout::render_root(frame, &self.state, &palette))?;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(state, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
