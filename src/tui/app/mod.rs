//! Terminal handling shared by TUI applications
//!
//! `App` puts the terminal into raw mode on the alternate screen and
//! restores it on drop (and on panic), so callers only deal with drawing
//! and events.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{debug, warn};

/// Raw-mode terminal with an event poll interval.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    mouse: bool,
}

impl App {
    /// Take over the terminal.
    ///
    /// # Arguments
    /// * `tick_rate` - How long `next_event` waits before returning `None`
    /// * `mouse` - Whether to capture mouse events
    pub fn new(tick_rate: Duration, mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        install_panic_hook(mouse);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        debug!(mouse, "terminal initialized");

        Ok(Self {
            terminal,
            tick_rate,
            mouse,
        })
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        if self.mouse {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore terminal: {}", e);
        }
    }
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook(mouse: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen);
        previous(info);
    }));
}
