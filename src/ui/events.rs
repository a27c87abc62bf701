use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A conversion finished with this text.
    Conversion(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Use short poll timeout to check shutdown flag frequently
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Paste(text)) => {
                            let _ = event_tx.send(AppEvent::Paste(text));
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("Input read error: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout - no event
                    }
                    Err(err) => {
                        tracing::error!("Input poll error: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone of the event sender, for tasks that feed results back into
    /// the UI loop.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
