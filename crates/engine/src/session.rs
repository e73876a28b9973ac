//! Session orchestration: one game, three threads.

use std::panic;
use std::thread::{self, ScopedJoinHandle};

use anyhow::{Context, Result};

use crate::clock::TickClock;
use crate::config::GameConfig;
use crate::core::{RandomSpawner, SharedWorld, Spawner, World};
use crate::input::{run_input, KeySource};
use crate::render::run_render;
use crate::simulation::run_simulation;
use crate::term::{GameView, Screen};
use crate::types::EndReason;

/// How a finished session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub score: u32,
    pub ticks: u64,
    pub frames: u64,
    pub end_reason: EndReason,
}

/// One game from a fresh world to the end of the session.
pub struct Session {
    config: GameConfig,
    shared: SharedWorld,
    spawner: Box<dyn Spawner>,
    view: GameView,
}

impl Session {
    /// Validate the configuration and build the initial world.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("invalid game configuration")?;

        let spawner: Box<dyn Spawner> = match config.seed {
            Some(seed) => Box::new(RandomSpawner::seeded(seed)),
            None => Box::new(RandomSpawner::from_entropy()),
        };

        Ok(Self {
            shared: SharedWorld::new(World::new(config.width, config.height)),
            config,
            spawner,
            view: GameView::default(),
        })
    }

    /// Replace the spawn policy.
    pub fn with_spawner(mut self, spawner: Box<dyn Spawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Play the session to the end.
    ///
    /// Input and simulation run on their own threads; rendering runs on the
    /// calling thread. Returns once all three have stopped. If a component
    /// failed, its error is returned after the others have wound down.
    pub fn run(self, keys: &mut dyn KeySource, screen: &mut dyn Screen) -> Result<SessionReport> {
        let Session {
            config,
            shared,
            mut spawner,
            view,
        } = self;

        log::info!(
            "session started: {}x{} board, tick {:?}",
            config.width,
            config.height,
            config.tick
        );

        let shared = &shared;
        let spawner: &mut dyn Spawner = spawner.as_mut();
        let mut clock = TickClock::new(config.tick);
        let clock = &mut clock;
        let input_poll = config.input_poll;

        let (frames, input_result) = thread::scope(|s| -> Result<(Result<u64>, Result<()>)> {
            let simulation = thread::Builder::new()
                .name("simulation".into())
                .spawn_scoped(s, move || run_simulation(shared, spawner, clock))
                .map_err(|err| {
                    shared.stop(EndReason::Fault);
                    err
                })
                .context("spawning the simulation thread")?;

            let input = thread::Builder::new()
                .name("input".into())
                .spawn_scoped(s, move || run_input(shared, keys, input_poll))
                .map_err(|err| {
                    shared.stop(EndReason::Fault);
                    err
                })
                .context("spawning the input thread")?;

            let frames = run_render(shared, &view, screen);

            let input_result = join(input);
            join(simulation);
            Ok((frames, input_result))
        })?;

        let frames = frames?;
        input_result?;

        let report = SessionReport {
            score: shared.score(),
            ticks: shared.ticks(),
            frames,
            end_reason: shared.end_reason().unwrap_or(EndReason::Fault),
        };
        log::info!(
            "session ended by {} after {} ticks, score {}",
            report.end_reason.as_str(),
            report.ticks,
            report.score
        );
        Ok(report)
    }
}

// A worker panic has already stopped the session through its guard; carry
// the panic on into the orchestrating thread.
fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| panic::resume_unwind(payload))
}
