//! Render snapshot - the data a frame is drawn from
//!
//! Copied out of the world while the lock is held so that formatting and
//! terminal output happen without blocking the simulation.

use crate::types::Obstacle;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u16,
    pub height: u16,
    pub player_x: u16,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Generation of the tick this snapshot was taken after (0 before the first).
    pub tick: u64,
    pub running: bool,
}

impl Snapshot {
    pub fn capture(world: &World, tick: u64, running: bool) -> Self {
        Self {
            width: world.width(),
            height: world.height(),
            player_x: world.player_x(),
            obstacles: world.obstacles().to_vec(),
            score: world.score(),
            tick,
            running,
        }
    }

    /// Obstacles that are drawn: everything above the floor row.
    pub fn visible_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        let floor = self.height - 1;
        self.obstacles.iter().filter(move |o| o.y < floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_copies_world_fields() {
        let mut world = World::new(10, 8);
        world.push_obstacle(Obstacle::new(3, 4));

        let snap = Snapshot::capture(&world, 7, true);
        assert_eq!(snap.width, 10);
        assert_eq!(snap.height, 8);
        assert_eq!(snap.player_x, 5);
        assert_eq!(snap.obstacles, vec![Obstacle::new(3, 4)]);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.tick, 7);
        assert!(snap.running);
    }

    #[test]
    fn floor_row_obstacles_are_not_visible() {
        let mut world = World::new(10, 8);
        world.push_obstacle(Obstacle::new(3, 6));
        world.push_obstacle(Obstacle::new(4, 7));

        let snap = Snapshot::capture(&world, 0, true);
        let visible: Vec<_> = snap.visible_obstacles().copied().collect();
        assert_eq!(visible, vec![Obstacle::new(3, 6)]);
    }
}
