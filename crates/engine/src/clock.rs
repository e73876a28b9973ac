//! Fixed-rate tick scheduling.

use std::thread;
use std::time::{Duration, Instant};

/// How many whole periods the clock may lag before it resyncs.
pub const MAX_LAG_PERIODS: u32 = 5;

/// Absolute deadline schedule: the k-th deadline is `start + k * period`.
///
/// A step that overruns its slot shortens the following sleep instead of
/// pushing every later deadline back, so the long-run rate stays at
/// `1 / period`. Falling more than [`MAX_LAG_PERIODS`] behind (a suspended
/// process, a stalled machine) restarts the schedule from now instead of
/// replaying the missed ticks back to back.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(Instant::now(), period)
    }

    pub fn starting_at(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next: start,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Move to the next deadline and return it.
    pub fn advance(&mut self) -> Instant {
        self.next += self.period;
        self.next
    }

    /// Sleep until the next deadline. Returns at once if it already passed.
    pub fn wait(&mut self) {
        let deadline = self.advance();
        let now = Instant::now();
        match deadline.checked_duration_since(now) {
            Some(delay) => thread::sleep(delay),
            None if now - deadline > self.period * MAX_LAG_PERIODS => {
                log::debug!("tick clock {:?} behind, resyncing", now - deadline);
                self.next = now;
            }
            None => log::trace!("tick overran its deadline"),
        }
    }
}
