//! Falling Star (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can use
//! `falling_star::{core,engine,input,term,types}`.

pub mod logging;

pub use falling_star_core as core;
pub use falling_star_engine as engine;
pub use falling_star_input as input;
pub use falling_star_term as term;
pub use falling_star_types as types;
