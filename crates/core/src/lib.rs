//! Core game logic - the world state and the monitor guarding it
//!
//! This crate holds everything the three game threads agree on:
//!
//! - [`world`]: board, player, obstacles and the per-tick rules
//! - [`spawn`]: the once-per-tick spawn policy
//! - [`shared`]: [`SharedWorld`], the lock + condition variable + running
//!   flag the input, simulation and render threads synchronize on
//! - [`snapshot`]: the copy of the world a frame is drawn from
//!
//! `World` itself is single-threaded and deterministic for a given spawner,
//! which is what the model-checking tests rely on.
//!
//! # Tick rules
//!
//! Each tick runs four sub-steps under one lock acquisition:
//!
//! 1. **Spawn**: roll the spawner, append an obstacle on row 1 on success
//! 2. **Advance**: every obstacle falls one row
//! 3. **Collision**: an obstacle on the player's cell ends the session
//! 4. **Reclaim**: obstacles reaching the floor row are removed and scored
//!
//! # Example
//!
//! ```
//! use falling_star_core::{ScriptedSpawner, SharedWorld, World};
//!
//! let shared = SharedWorld::new(World::new(40, 20));
//! let mut spawner = ScriptedSpawner::new([Some(21)]);
//!
//! for _ in 0..18 {
//!     shared.tick(&mut spawner);
//! }
//! assert_eq!(shared.score(), 1);
//! assert!(shared.is_running());
//! ```

pub mod shared;
pub mod snapshot;
pub mod spawn;
pub mod world;

pub use falling_star_types as types;

pub use shared::{SharedWorld, StopGuard};
pub use snapshot::Snapshot;
pub use spawn::{NeverSpawn, RandomSpawner, ScriptedSpawner, Spawner};
pub use world::{StepOutcome, World};
