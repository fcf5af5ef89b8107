use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::domain::Message;

/// Everything the driver loop can wake up on.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input from the terminal.
    Input(KeyEvent),
    /// A command result re-entering the loop as a domain message.
    Message(Message),
    /// Terminal was resized; the next draw picks up the new size.
    Resize(u16, u16),
    /// Periodic wake-up so the loop redraws even when idle.
    Tick,
}

/// Single event stream for the driver loop.
///
/// A background thread turns crossterm input into events; executed
/// commands send their results through `sender()`. Both land in the same
/// channel, so the loop processes everything strictly one at a time.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Input(key)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(_) => break,
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// A handle for feeding command results back into the loop.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
