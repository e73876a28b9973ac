//! World state module - the board, the player and the falling obstacles
//!
//! `World` is plain data plus the rules that mutate it. It knows nothing about
//! threads; [`crate::shared::SharedWorld`] wraps it in the lock the three
//! components share.

use crate::spawn::Spawner;
use crate::types::{GameAction, Obstacle, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH, SPAWN_ROW};

/// What a single [`World::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Obstacle appended by the spawn sub-step (before it advanced).
    pub spawned: Option<Obstacle>,
    /// An obstacle reached the player's cell this tick.
    pub collided: bool,
    /// Obstacles removed at the floor this tick.
    pub reclaimed: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    width: u16,
    height: u16,
    player_x: u16,
    obstacles: Vec<Obstacle>,
    score: u32,
}

impl World {
    /// Create a fresh world with the player centered and no obstacles.
    ///
    /// # Panics
    ///
    /// Panics if the board is smaller than `MIN_BOARD_WIDTH` x `MIN_BOARD_HEIGHT`.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width >= MIN_BOARD_WIDTH && height >= MIN_BOARD_HEIGHT,
            "board {width}x{height} is smaller than {MIN_BOARD_WIDTH}x{MIN_BOARD_HEIGHT}"
        );
        Self {
            width,
            height,
            player_x: width / 2,
            obstacles: Vec::new(),
            score: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn player_x(&self) -> u16 {
        self.player_x
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Row the player is drawn on (directly above the floor).
    pub fn player_row(&self) -> u16 {
        self.height - 2
    }

    /// Row of the floor wall. Obstacles reaching it are reclaimed.
    pub fn floor_row(&self) -> u16 {
        self.height - 1
    }

    /// Apply a movement action, clamped to the playable columns.
    ///
    /// Returns `true` if the player actually moved. `Quit` is not a movement
    /// and leaves the world untouched.
    pub fn move_player(&mut self, action: GameAction) -> bool {
        let target = i32::from(self.player_x) + action.dx();
        let clamped = target.clamp(1, i32::from(self.width) - 2) as u16;
        let moved = clamped != self.player_x;
        self.player_x = clamped;
        moved
    }

    /// Advance the world by one tick.
    ///
    /// Sub-steps run in a fixed order: spawn, advance, collision check,
    /// reclaim. A collision does not short-circuit the reclaim.
    pub fn step(&mut self, spawner: &mut dyn Spawner) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        if let Some(x) = spawner.roll(self.width) {
            let x = x.clamp(1, self.width - 2);
            let obstacle = Obstacle::new(x, SPAWN_ROW);
            self.obstacles.push(obstacle);
            outcome.spawned = Some(obstacle);
        }

        for obstacle in &mut self.obstacles {
            *obstacle = obstacle.fallen();
        }

        let player = Obstacle::new(self.player_x, self.player_row());
        outcome.collided = self.obstacles.contains(&player);

        let floor = self.floor_row();
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.y < floor);
        outcome.reclaimed = (before - self.obstacles.len()) as u32;
        self.score += outcome.reclaimed;

        outcome
    }

    /// Place an obstacle directly. Used by tests to build board states.
    pub fn push_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::{NeverSpawn, ScriptedSpawner};

    #[test]
    fn new_world_is_centered_and_empty() {
        let world = World::new(40, 20);
        assert_eq!(world.player_x(), 20);
        assert!(world.obstacles().is_empty());
        assert_eq!(world.score(), 0);
        assert_eq!(world.player_row(), 18);
        assert_eq!(world.floor_row(), 19);
    }

    #[test]
    #[should_panic]
    fn too_small_board_is_rejected() {
        let _ = World::new(2, 20);
    }

    #[test]
    fn move_player_clamps_at_edges() {
        let mut world = World::new(5, 5);
        assert_eq!(world.player_x(), 2);

        assert!(world.move_player(GameAction::MoveLeft));
        assert_eq!(world.player_x(), 1);
        assert!(!world.move_player(GameAction::MoveLeft));
        assert_eq!(world.player_x(), 1);

        assert!(world.move_player(GameAction::MoveRight));
        assert!(world.move_player(GameAction::MoveRight));
        assert!(!world.move_player(GameAction::MoveRight));
        assert_eq!(world.player_x(), 3);
    }

    #[test]
    fn quit_is_not_a_move() {
        let mut world = World::new(40, 20);
        assert!(!world.move_player(GameAction::Quit));
        assert_eq!(world.player_x(), 20);
    }

    #[test]
    fn spawned_obstacle_advances_in_the_same_tick() {
        let mut world = World::new(40, 20);
        let mut spawner = ScriptedSpawner::new([Some(7)]);

        let outcome = world.step(&mut spawner);
        assert_eq!(outcome.spawned, Some(Obstacle::new(7, 1)));
        assert_eq!(world.obstacles(), &[Obstacle::new(7, 2)]);
    }

    #[test]
    fn reclaim_removes_and_scores() {
        let mut world = World::new(40, 20);
        world.push_obstacle(Obstacle::new(3, 18));
        world.push_obstacle(Obstacle::new(4, 18));
        world.push_obstacle(Obstacle::new(5, 10));

        let outcome = world.step(&mut NeverSpawn);
        assert_eq!(outcome.reclaimed, 2);
        assert!(!outcome.collided);
        assert_eq!(world.score(), 2);
        assert_eq!(world.obstacles(), &[Obstacle::new(5, 11)]);
    }

    #[test]
    fn collision_is_flagged_and_reclaim_still_runs() {
        let mut world = World::new(40, 20);
        world.push_obstacle(Obstacle::new(20, 17));
        world.push_obstacle(Obstacle::new(9, 18));

        let outcome = world.step(&mut NeverSpawn);
        assert!(outcome.collided);
        assert_eq!(outcome.reclaimed, 1);
        assert_eq!(world.score(), 1);
        assert_eq!(world.obstacles(), &[Obstacle::new(20, 18)]);
    }

    #[test]
    fn out_of_range_spawn_is_clamped_onto_the_board() {
        let mut world = World::new(10, 10);
        let mut spawner = ScriptedSpawner::new([Some(0), Some(99)]);

        world.step(&mut spawner);
        world.step(&mut spawner);
        assert!(world.obstacles().iter().all(|o| (1..=8).contains(&o.x)));
    }
}
