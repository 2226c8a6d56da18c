//! Terminal input for the run loop.
//!
//! Wraps crossterm polling so the loop sees only the events it acts on: key
//! presses, resizes (which trigger a relayout and a new page size), and an idle
//! tick when nothing arrived in time.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// No input within one tick, or input the loop ignores.
    Tick,
    Resize(u16, u16),
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Block for at most one tick.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        let event = match event::read()? {
            // Release and repeat events would double every keystroke on Windows.
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        };
        Ok(event)
    }
}
