//! The simulation thread loop.

use crate::clock::TickClock;
use crate::core::{SharedWorld, Spawner};

/// Advance the shared world once per clock period until the session ends.
///
/// Each iteration is one [`SharedWorld::tick`] (spawn, advance, collide,
/// reclaim as one critical section, followed by one render notification) and
/// then a sleep until the next deadline. The loop exits at the top of the
/// next iteration once the session is over, whoever ended it.
pub fn run_simulation(shared: &SharedWorld, spawner: &mut dyn Spawner, clock: &mut TickClock) {
    let _guard = shared.stop_guard();
    log::debug!("simulation started, period {:?}", clock.period());

    while shared.is_running() {
        let Some(outcome) = shared.tick(spawner) else {
            break;
        };

        if let Some(obstacle) = outcome.spawned {
            log::trace!("spawned obstacle at x={}", obstacle.x);
        }
        if outcome.reclaimed > 0 {
            log::debug!("reclaimed {} obstacle(s)", outcome.reclaimed);
        }
        if outcome.collided {
            log::info!("collision, score {}", shared.score());
        }

        clock.wait();
    }

    log::debug!("simulation finished after {} ticks", shared.ticks());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedSpawner, World};
    use crate::types::{EndReason, Obstacle};
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn runs_until_collision() {
        let mut world = World::new(40, 20);
        world.push_obstacle(Obstacle::new(20, 15));
        let shared = SharedWorld::new(world);

        let mut spawner = ScriptedSpawner::default();
        let mut clock = TickClock::new(Duration::from_millis(1));
        run_simulation(&shared, &mut spawner, &mut clock);

        assert_eq!(shared.ticks(), 3);
        assert_eq!(shared.end_reason(), Some(EndReason::Collision));
    }

    #[test]
    fn does_nothing_once_stopped() {
        let shared = SharedWorld::new(World::new(40, 20));
        shared.stop(EndReason::Quit);

        let mut spawner = ScriptedSpawner::new([Some(3)]);
        let mut clock = TickClock::new(Duration::from_millis(1));
        run_simulation(&shared, &mut spawner, &mut clock);

        assert_eq!(shared.ticks(), 0);
        assert_eq!(spawner.remaining(), 1);
    }

    #[test]
    fn stop_during_sleep_exits_within_one_period() {
        let period = Duration::from_millis(33);
        let shared = SharedWorld::new(World::new(40, 20));

        thread::scope(|s| {
            let sim = s.spawn(|| {
                let mut spawner = ScriptedSpawner::default();
                let mut clock = TickClock::new(period);
                run_simulation(&shared, &mut spawner, &mut clock);
            });

            // Let it settle into a sleep between ticks.
            thread::sleep(period * 2 + Duration::from_millis(10));
            assert!(shared.ticks() >= 2);

            let stopped = Instant::now();
            shared.stop(EndReason::Quit);
            sim.join().unwrap();

            let latency = stopped.elapsed();
            assert!(latency < period + Duration::from_millis(5), "{latency:?}");
        });

        assert_eq!(shared.end_reason(), Some(EndReason::Quit));
    }
}
