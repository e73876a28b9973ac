//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the input thread and the renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 40 columns (indexed 0-39), playable columns 1-38
//! - **Height**: 20 rows (indexed 0-19)
//! - **Floor**: row 19 is a solid wall, the player lives on row 18
//! - **Spawn row**: obstacles appear on row 1
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed simulation period (~30 steps per second) |
//! | `INPUT_POLL_MS` | 1 | Keyboard poll timeout |
//!
//! # Examples
//!
//! ```
//! use falling_star_types::{GameAction, Obstacle, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let star = Obstacle::new(20, 1);
//! assert_eq!(star.fallen(), Obstacle::new(20, 2));
//!
//! assert_eq!(GameAction::MoveLeft.dx(), -1);
//!
//! assert_eq!(BOARD_WIDTH, 40);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (40 columns)
pub const BOARD_WIDTH: u16 = 40;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Smallest board width that still leaves one playable column.
pub const MIN_BOARD_WIDTH: u16 = 3;

/// Smallest board height that leaves a player row above the floor.
pub const MIN_BOARD_HEIGHT: u16 = 3;

/// Largest board accepted, in either direction. Far beyond any real terminal,
/// and leaves room for the footer rows below the board.
pub const MAX_BOARD_SIDE: u16 = 1024;

/// Fixed simulation period in milliseconds (33ms ≈ 30 steps per second)
pub const TICK_MS: u64 = 33;

/// Keyboard poll timeout in milliseconds
pub const INPUT_POLL_MS: u64 = 1;

/// One tick in `SPAWN_ONE_IN` spawns a new obstacle on average.
pub const SPAWN_ONE_IN: u32 = 5;

/// Row new obstacles appear on.
pub const SPAWN_ROW: u16 = 1;

pub const WALL_GLYPH: char = '#';
pub const PLAYER_GLYPH: char = 'P';
pub const OBSTACLE_GLYPH: char = '*';

/// A falling obstacle, identified by its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub x: u16,
    pub y: u16,
}

impl Obstacle {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The same obstacle one row further down.
    pub const fn fallen(self) -> Self {
        Self {
            x: self.x,
            y: self.y + 1,
        }
    }
}

/// Actions a key press can map to.
///
/// Movement is clamped to the playable columns by the world itself, so a
/// `MoveLeft` at the left edge is simply a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the player one cell left
    MoveLeft,
    /// Move the player one cell right
    MoveRight,
    /// End the session
    Quit,
}

impl GameAction {
    /// Horizontal offset applied to the player, if any.
    pub fn dx(&self) -> i32 {
        match self {
            GameAction::MoveLeft => -1,
            GameAction::MoveRight => 1,
            GameAction::Quit => 0,
        }
    }
}

/// Why a session ended.
///
/// Recorded by whichever component cleared the running flag first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player pressed the quit key
    Quit,
    /// An obstacle hit the player
    Collision,
    /// A component failed (terminal I/O error or panic)
    Fault,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Quit => "quit",
            EndReason::Collision => "collision",
            EndReason::Fault => "fault",
        }
    }
}
