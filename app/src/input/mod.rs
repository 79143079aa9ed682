//! Terminal input: a thin layer over `crossterm::event`.

pub mod keyboard;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub use keyboard::*;

/// Events the runner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Key releases and repeats are folded into `Other` so
/// handlers see each key exactly once on every platform.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
