//! Shared world - the monitor the three game threads synchronize on
//!
//! [`SharedWorld`] owns the [`World`] behind a single mutex, together with the
//! condition variable the simulation uses to announce finished ticks and the
//! session's running flag. Every mutation goes through one of the methods
//! below, each of which is a single critical section:
//!
//! - [`SharedWorld::apply`]: input, one player move (or the quit request)
//! - [`SharedWorld::tick`]: simulation, spawn/advance/collide/reclaim as a unit
//! - [`SharedWorld::wait_frame`]: render, copy a [`Snapshot`] of a new tick
//!
//! # Running flag
//!
//! `running` is an atomic so that loop conditions can poll it without taking
//! the lock ([`SharedWorld::is_running`]). It is only ever *written* while the
//! lock is held, which keeps it linearized with the world mutations and lets
//! the render wait re-check it inside its predicate. It goes `true -> false`
//! exactly once; the first caller to clear it records the [`EndReason`].
//!
//! # Shutdown
//!
//! Render waits with the predicate "no new tick and still running". The
//! simulation notifies after every tick (including the one that ends the game)
//! and [`SharedWorld::stop`] notifies all waiters, so a render thread can never
//! be left blocked after the session ends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::snapshot::Snapshot;
use crate::spawn::Spawner;
use crate::types::{EndReason, GameAction};
use crate::world::{StepOutcome, World};

#[derive(Debug)]
struct Inner {
    world: World,
    /// Completed simulation steps.
    tick: u64,
    end_reason: Option<EndReason>,
}

#[derive(Debug)]
pub struct SharedWorld {
    inner: Mutex<Inner>,
    ticked: Condvar,
    running: AtomicBool,
}

impl SharedWorld {
    pub fn new(world: World) -> Self {
        Self {
            inner: Mutex::new(Inner {
                world,
                tick: 0,
                end_reason: None,
            }),
            ticked: Condvar::new(),
            running: AtomicBool::new(true),
        }
    }

    // A panicking component stops the session through its `StopGuard`; the
    // world itself is still readable for the final report.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advisory read of the running flag, for loop conditions only.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Clear `running` while holding the lock. Returns whether this call ended
    /// the session.
    fn end_locked(&self, inner: &mut Inner, reason: EndReason) -> bool {
        if self.running.swap(false, Ordering::AcqRel) {
            inner.end_reason = Some(reason);
            true
        } else {
            false
        }
    }

    /// Apply one input action.
    ///
    /// Moves are clamped by the world. `Quit` ends the session. Returns
    /// `false` once the session is over, so the input loop can stop.
    pub fn apply(&self, action: GameAction) -> bool {
        let mut inner = self.lock();
        if !self.is_running() {
            return false;
        }

        match action {
            GameAction::Quit => {
                self.end_locked(&mut inner, EndReason::Quit);
                drop(inner);
                self.ticked.notify_all();
                log::info!("quit requested");
                false
            }
            GameAction::MoveLeft | GameAction::MoveRight => {
                if inner.world.move_player(action) {
                    log::trace!("player at x={}", inner.world.player_x());
                }
                true
            }
        }
    }

    /// Run one simulation step and announce it to the renderer.
    ///
    /// Returns `None` without touching the world if the session has already
    /// ended. A collision ends the session, but the tick is still counted and
    /// announced so the final board gets drawn.
    pub fn tick(&self, spawner: &mut dyn Spawner) -> Option<StepOutcome> {
        let outcome = {
            let mut inner = self.lock();
            if !self.is_running() {
                return None;
            }

            let outcome = inner.world.step(spawner);
            inner.tick += 1;
            if outcome.collided {
                self.end_locked(&mut inner, EndReason::Collision);
            }
            outcome
        };

        self.ticked.notify_one();
        Some(outcome)
    }

    /// End the session (if it is still running) and wake every waiter.
    ///
    /// Only the first reason is kept. Returns whether this call ended the
    /// session.
    pub fn stop(&self, reason: EndReason) -> bool {
        let ended = {
            let mut inner = self.lock();
            self.end_locked(&mut inner, reason)
        };
        self.ticked.notify_all();
        if ended {
            log::info!("session stopped: {}", reason.as_str());
        }
        ended
    }

    /// Block until a tick newer than `last_seen` exists or the session ends.
    ///
    /// Returns a snapshot of the newest tick and updates `last_seen`, or `None`
    /// once the session is over and every announced tick has been handed out.
    pub fn wait_frame(&self, last_seen: &mut u64) -> Option<Snapshot> {
        let seen = *last_seen;
        let inner = self
            .ticked
            .wait_while(self.lock(), |inner| inner.tick == seen && self.is_running())
            .unwrap_or_else(PoisonError::into_inner);

        if inner.tick == seen {
            return None;
        }

        *last_seen = inner.tick;
        Some(Snapshot::capture(&inner.world, inner.tick, self.is_running()))
    }

    /// Snapshot of the current state, without waiting.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        Snapshot::capture(&inner.world, inner.tick, self.is_running())
    }

    /// Read the world under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&World) -> R) -> R {
        f(&self.lock().world)
    }

    pub fn score(&self) -> u32 {
        self.lock().world.score()
    }

    pub fn ticks(&self) -> u64 {
        self.lock().tick
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.lock().end_reason
    }

    /// Guard that stops the session with [`EndReason::Fault`] when dropped.
    ///
    /// Each component holds one for the duration of its loop. On a normal
    /// exit the session is already over and the guard does nothing; on an
    /// early error return or a panic it wakes everyone else.
    pub fn stop_guard(&self) -> StopGuard<'_> {
        StopGuard { shared: self }
    }
}

pub struct StopGuard<'a> {
    shared: &'a SharedWorld,
}

impl Drop for StopGuard<'_> {
    fn drop(&mut self) {
        if self.shared.stop(EndReason::Fault) {
            if std::thread::panicking() {
                log::error!("game thread panicked, session stopped");
            } else {
                log::warn!("game thread exited early, session stopped");
            }
        }
    }
}
