use std::{
    io::{self, stdout, Stdout},
    panic,
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::GridView;
use crate::gym::TaxiFuel;

/// A full-screen terminal session for watching a [`TaxiFuel`] episode play out
///
/// The terminal is restored when the session is dropped, and on panic.
pub struct Replay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Replay {
    /// Enter the alternate screen in raw mode
    pub fn start() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));

        execute!(stdout(), EnterAlternateScreen)?;
        enable_raw_mode()?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }

    /// Draw the environment's current state over the whole screen
    pub fn draw(&mut self, env: &TaxiFuel) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(GridView::new(env), frame.size()))?;
        Ok(())
    }

    /// Wait up to `timeout` for the user to press `q`
    pub fn quit_requested(&self, timeout: Duration) -> io::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }
        Ok(matches!(
            event::read()?,
            Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q')
        ))
    }
}

impl Drop for Replay {
    fn drop(&mut self) {
        let _ = restore();
    }
}

fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}
