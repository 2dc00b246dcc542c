use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Terminal resize
    Resize,
    /// Tick for animations and stream polling
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> color_eyre::Result<AppEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(AppEvent::Tick);
        }
        match event::read()? {
            // Windows reports releases too; only react to presses
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
            CrosstermEvent::Resize(_, _) => Ok(AppEvent::Resize),
            _ => Ok(AppEvent::Tick),
        }
    }
}
