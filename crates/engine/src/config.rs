//! Session configuration.
//!
//! Players cannot change any of this; the defaults come from the constants in
//! [`crate::types`]. Tests shrink the board and the periods and pin the seed.

use std::time::Duration;

use anyhow::{ensure, Result};

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, INPUT_POLL_MS, MAX_BOARD_SIDE, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
    TICK_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Simulation period.
    pub tick: Duration,
    /// Longest the input thread blocks on one keyboard poll.
    pub input_poll: Duration,
    /// Fixed spawn seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick: Duration::from_millis(TICK_MS),
            input_poll: Duration::from_millis(INPUT_POLL_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= MIN_BOARD_WIDTH && self.height >= MIN_BOARD_HEIGHT,
            "board {}x{} is smaller than the minimum {}x{}",
            self.width,
            self.height,
            MIN_BOARD_WIDTH,
            MIN_BOARD_HEIGHT
        );
        ensure!(
            self.width <= MAX_BOARD_SIDE && self.height <= MAX_BOARD_SIDE,
            "board {}x{} is larger than the maximum {}x{}",
            self.width,
            self.height,
            MAX_BOARD_SIDE,
            MAX_BOARD_SIDE
        );
        ensure!(!self.tick.is_zero(), "tick period must be non-zero");
        ensure!(!self.input_poll.is_zero(), "input poll interval must be non-zero");
        // The quit key has to be seen within one tick.
        ensure!(
            self.input_poll <= self.tick,
            "input poll interval {:?} exceeds the tick period {:?}",
            self.input_poll,
            self.tick
        );
        Ok(())
    }
}
