//! Terminal event plumbing.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent};

/// Events delivered to the main loop.
#[derive(Debug)]
pub enum Event {
    /// Periodic tick (no input within the tick rate).
    Tick,
    /// Key press.
    Key(KeyEvent),
    /// Mouse event (page links are clickable).
    Mouse(MouseEvent),
    /// Terminal resize.
    Resize(u16, u16),
}

/// Reads crossterm events on a background thread and forwards them over a
/// channel, emitting `Tick` when no input arrives within the tick rate.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(_) => break,
                };

                if ready {
                    let forwarded = match event::read() {
                        // Key repeats/releases (kitty protocol) would double-fire actions.
                        Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            tx.send(Event::Key(key))
                        }
                        Ok(event::Event::Key(_)) => Ok(()),
                        Ok(event::Event::Mouse(mouse)) => tx.send(Event::Mouse(mouse)),
                        Ok(event::Event::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                        Ok(_) => Ok(()),
                        Err(_) => break,
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
