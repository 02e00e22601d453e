//! Event plumbing between crossterm and the application loop.
//!
//! A background thread polls the terminal; key presses and resizes are
//! forwarded over a channel, and poll timeouts become redraw ticks (used to
//! expire transient status messages).

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Redraw tick; fires when no input arrived within the tick rate.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
}

/// Polls the terminal on a background thread and hands events to the main
/// loop.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let forwarded = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                        Ok(_) => continue,
                        Err(_) => break,
                    }
                } else {
                    Event::Tick
                };
                if event_tx.send(forwarded).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Blocks until the next event is available.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}
