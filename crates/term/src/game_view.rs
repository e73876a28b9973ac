//! GameView: maps a world [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{OBSTACLE_GLYPH, PLAYER_GLYPH, WALL_GLYPH};

/// Static line printed under the score.
pub const HELP_LINE: &str = "<- -> to move, ESC to quit.";

/// Lines printed below the board (score and help).
const FOOTER_ROWS: u16 = 2;

/// Draws the board one terminal cell per board cell.
#[derive(Debug, Clone)]
pub struct GameView {
    wall: CellStyle,
    player: CellStyle,
    obstacle: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            wall: CellStyle::fg(Rgb::new(140, 140, 150)),
            player: CellStyle::fg(Rgb::new(80, 220, 220)).bold(),
            obstacle: CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            text: CellStyle::default(),
        }
    }
}

impl GameView {
    /// Render a snapshot.
    ///
    /// Layout, top to bottom: `height` board rows (the last one is the floor
    /// wall, the one above it holds the player), then `Score: N`, then the
    /// help line. Obstacles on the floor row are never drawn.
    pub fn render(&self, snap: &Snapshot) -> FrameBuffer {
        let score_line = format!("Score: {}", snap.score);
        let width = snap
            .width
            .max(HELP_LINE.chars().count() as u16)
            .max(score_line.len() as u16);
        let mut fb = FrameBuffer::new(width, snap.height.saturating_add(FOOTER_ROWS));

        let floor = snap.height - 1;
        for x in 0..snap.width {
            fb.put_char(x, floor, WALL_GLYPH, self.wall);
        }

        fb.put_char(snap.player_x, floor - 1, PLAYER_GLYPH, self.player);

        for obstacle in snap.visible_obstacles() {
            fb.put_char(obstacle.x, obstacle.y, OBSTACLE_GLYPH, self.obstacle);
        }

        fb.put_str(0, snap.height, &score_line, self.text);
        fb.put_str(0, snap.height + 1, HELP_LINE, self.text.dim());

        fb
    }
}
