//! Logger setup for the binary.

/// Initialize `env_logger`.
///
/// Logging is off unless `RUST_LOG` asks for it. The game owns the terminal,
/// so redirect stderr when enabling it: `RUST_LOG=debug falling-star 2>game.log`.
pub fn init_logger() {
    // parse_default_env reads RUST_LOG and applies it on top of the default filter.
    env_logger::builder()
        .filter_level(log::LevelFilter::Off)
        .parse_default_env()
        .init();
}
