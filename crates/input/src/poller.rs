//! The input thread loop.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::core::SharedWorld;
use crate::map::action_for;
use crate::source::KeySource;
use crate::types::{EndReason, GameAction};

/// Upper bound on key events drained in one poll.
const MAX_BATCH: usize = 16;

/// Poll keys and apply them to the shared world until the session ends.
///
/// Each poll waits at most `poll_interval`, so the loop notices a session
/// ended by another thread within one interval. Keys already queued behind
/// the first one are drained without waiting and applied in order; a quit in
/// the batch wins over any moves after it.
///
/// A failing key source stops the session with [`EndReason::Fault`] before the
/// error is returned.
pub fn run_input(
    shared: &SharedWorld,
    source: &mut dyn KeySource,
    poll_interval: Duration,
) -> Result<()> {
    let _guard = shared.stop_guard();
    log::debug!("input loop started");

    while shared.is_running() {
        let batch = match poll_batch(source, poll_interval) {
            Ok(batch) => batch,
            Err(err) => {
                log::error!("reading keyboard failed: {err:#}");
                shared.stop(EndReason::Fault);
                return Err(err);
            }
        };

        for action in batch {
            if !shared.apply(action) {
                break;
            }
        }
    }

    log::debug!("input loop finished");
    Ok(())
}

fn poll_batch(
    source: &mut dyn KeySource,
    poll_interval: Duration,
) -> Result<ArrayVec<GameAction, MAX_BATCH>> {
    let mut batch = ArrayVec::new();

    let mut next = source.poll_key(poll_interval)?;
    while let Some(key) = next {
        if let Some(action) = action_for(key) {
            batch.push(action);
            if action == GameAction::Quit || batch.is_full() {
                break;
            }
        }
        next = source.poll_key(Duration::ZERO)?;
    }

    Ok(batch)
}
