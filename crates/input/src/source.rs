//! Key sources - where the input thread gets key events from.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};

/// A blocking-with-timeout source of key events.
pub trait KeySource: Send {
    /// Wait at most `timeout` for a key event.
    ///
    /// `Ok(None)` means nothing arrived in time. A zero timeout must not block.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Keyboard input from the controlling terminal.
///
/// Non-key events (resize, focus, mouse, paste) are consumed and skipped.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Replays key events at fixed offsets from the first poll.
///
/// Once the script is exhausted it behaves like an idle keyboard: every poll
/// sleeps for its timeout and returns nothing.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    script: VecDeque<(Duration, KeyEvent)>,
    started: Option<Instant>,
}

impl ScriptedKeys {
    pub fn new(script: impl IntoIterator<Item = (Duration, KeyEvent)>) -> Self {
        Self {
            script: script.into_iter().collect(),
            started: None,
        }
    }

    /// A keyboard nobody touches.
    pub fn idle() -> Self {
        Self::default()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        let started = *self.started.get_or_insert_with(Instant::now);

        if let Some(&(at, key)) = self.script.front() {
            let due = started + at;
            let now = Instant::now();
            if due <= now {
                self.script.pop_front();
                return Ok(Some(key));
            }
            thread::sleep(timeout.min(due - now));
            return Ok(None);
        }

        thread::sleep(timeout);
        Ok(None)
    }
}
