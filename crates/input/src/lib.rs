//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and runs the
//! input thread that applies them to the shared world. The key source is a
//! trait so the loop can be driven by a script in tests.

pub mod map;
pub mod poller;
pub mod source;

pub use falling_star_core as core;
pub use falling_star_types as types;

pub use map::{action_for, should_quit};
pub use poller::run_input;
pub use source::{CrosstermKeys, KeySource, ScriptedKeys};
