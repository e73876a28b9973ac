//! Spawn policy - decides once per tick whether a new obstacle appears
//!
//! The world asks a [`Spawner`] for one roll per tick. The production policy
//! is [`RandomSpawner`]; tests plug in [`ScriptedSpawner`] or [`NeverSpawn`]
//! to force exact board states.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::SPAWN_ONE_IN;

/// Source of spawn decisions.
pub trait Spawner: Send {
    /// Roll for this tick. `Some(x)` spawns an obstacle in column `x`, which
    /// should lie in `[1, width - 2]`.
    fn roll(&mut self, width: u16) -> Option<u16>;
}

/// Spawns roughly one tick in [`SPAWN_ONE_IN`], at a uniformly random column.
///
/// The spawn decision and the column are independent draws.
#[derive(Debug, Clone)]
pub struct RandomSpawner<R = StdRng> {
    rng: R,
    one_in: u32,
}

impl RandomSpawner<StdRng> {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic spawner for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            one_in: SPAWN_ONE_IN,
        }
    }
}

impl<R: Rng + Send> Spawner for RandomSpawner<R> {
    fn roll(&mut self, width: u16) -> Option<u16> {
        if !self.rng.gen_ratio(1, self.one_in) {
            return None;
        }
        Some(self.rng.gen_range(1..=width - 2))
    }
}

/// Never spawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverSpawn;

impl Spawner for NeverSpawn {
    fn roll(&mut self, _width: u16) -> Option<u16> {
        None
    }
}

/// Replays a fixed list of rolls, then never spawns again.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpawner {
    rolls: VecDeque<Option<u16>>,
}

impl ScriptedSpawner {
    pub fn new(rolls: impl IntoIterator<Item = Option<u16>>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not consumed yet.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Spawner for ScriptedSpawner {
    fn roll(&mut self, _width: u16) -> Option<u16> {
        self.rolls.pop_front().flatten()
    }
}
