//! Game engine - the three-thread real-time loop
//!
//! A [`Session`] owns one [`core::SharedWorld`] and hands a reference to each
//! of the three components:
//!
//! - **input** ([`input::run_input`]) on its own thread, polling the keyboard
//! - **simulation** ([`run_simulation`]) on its own thread, stepping the world
//!   every [`TickClock`] period and signalling the renderer
//! - **render** ([`run_render`]) on the calling thread, drawing a frame per tick
//!
//! All three loop until the running flag is cleared, by the quit key, by a
//! collision, or by a failing component. `Session::run` returns once every
//! thread has stopped.
//!
//! # Example
//!
//! ```no_run
//! use falling_star_engine::{GameConfig, Session};
//! use falling_star_input::CrosstermKeys;
//! use falling_star_term::TerminalRenderer;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut term = TerminalRenderer::new();
//! term.enter()?;
//! let report = Session::new(GameConfig::default())?.run(&mut CrosstermKeys, &mut term);
//! term.exit()?;
//! println!("Final Score = {}", report?.score);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod render;
pub mod session;
pub mod simulation;

pub use falling_star_core as core;
pub use falling_star_input as input;
pub use falling_star_term as term;
pub use falling_star_types as types;

pub use clock::TickClock;
pub use config::GameConfig;
pub use render::run_render;
pub use session::{Session, SessionReport};
pub use simulation::run_simulation;
