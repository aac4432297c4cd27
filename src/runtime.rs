use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant, SystemTime};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// How long to block when no tick is pending
const IDLE_WAIT: Duration = Duration::from_secs(3600);

/// Everything the event loop can wake up for
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize,
    Tick(SystemTime),
}

/// Where keyboard, paste and resize events come from
pub trait EventSource: Send + 'static {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Reads the terminal on a background thread
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => AppEvent::Key(key),
                Ok(CtEvent::Paste(text)) => AppEvent::Paste(text),
                Ok(CtEvent::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!("failed to read terminal event: {err}");
                    break;
                }
            };

            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Channel-fed source for driving the runner without a terminal
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Hands the event loop one event or tick at a time.
///
/// Ticks are one-shot: each must be requested with [`Runner::schedule_tick`]
/// and fires one interval later, however much input arrives meanwhile.
pub struct Runner<E: EventSource> {
    event_source: E,
    tick_interval: Duration,
    next_tick: Option<Instant>,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E, tick_interval: Duration) -> Self {
        Self {
            event_source,
            tick_interval,
            next_tick: None,
        }
    }

    pub fn schedule_tick(&mut self) {
        self.next_tick = Some(Instant::now() + self.tick_interval);
    }

    pub fn tick_pending(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Blocks until the next event or due tick.
    /// Returns None once the event source is gone and no tick is pending.
    pub fn step(&mut self) -> Option<AppEvent> {
        loop {
            let timeout = match self.next_tick {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => IDLE_WAIT,
            };

            match self.event_source.recv_timeout(timeout) {
                Ok(ev) => return Some(ev),
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(deadline) = self.next_tick {
                        if Instant::now() >= deadline {
                            self.next_tick = None;
                            return Some(AppEvent::Tick(SystemTime::now()));
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    let deadline = self.next_tick.take()?;
                    std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    return Some(AppEvent::Tick(SystemTime::now()));
                }
            }
        }
    }
}
