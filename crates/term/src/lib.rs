//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a
//! framebuffer by [`GameView`] and flushed to the terminal by
//! [`TerminalRenderer`]. Anything implementing [`Screen`] can stand in for
//! the terminal, which is how the session tests capture frames.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_star_core as core;
pub use falling_star_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HELP_LINE};
pub use renderer::{encode_full_into, Screen, TerminalRenderer};
