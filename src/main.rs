//! Terminal Falling Star runner.
//!
//! Dodge the stars falling onto the floor: arrow keys (or a/d, h/l) move,
//! ESC quits. Input and simulation run on background threads, rendering on
//! this one.

use anyhow::Result;

use falling_star::engine::{GameConfig, Session};
use falling_star::input::CrosstermKeys;
use falling_star::logging::init_logger;
use falling_star::term::TerminalRenderer;

fn main() -> Result<()> {
    init_logger();

    let session = Session::new(GameConfig::default())?;

    let mut term = TerminalRenderer::new();
    let report = term
        .enter()
        .and_then(|()| session.run(&mut CrosstermKeys, &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();

    let report = report?;
    println!("\nGame Over!  Final Score = {}", report.score);
    Ok(())
}
