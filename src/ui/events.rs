use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::analysis::AnalysisOutcome;
use crate::ui::form::RequestId;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A submission finished. Sent from a runtime task.
    AnalysisResolved {
        request_id: RequestId,
        outcome: AnalysisOutcome,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal input thread.
    ///
    /// The thread stops on its own once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate))
            .map(|_| ())
            .unwrap_or_else(|err| {
                tracing::error!(target: "events", error = %err, "failed to spawn input thread");
            });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: mpsc::Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        // Short poll so a dropped receiver is noticed quickly
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(target: "events", error = %err, "terminal read failed");
                    break;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!(target: "events", error = %err, "terminal poll failed");
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
