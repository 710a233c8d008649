//! Text-mode surface
//!
//! Rasterizes a frame onto a coarse character grid. Used by the headless
//! runner to show the final screen, and handy when debugging spawns.

use super::{Frame, RenderSurface};
use crate::sim::{Entity, ObstacleKind, Rect};

const PLAYER: char = '@';
const GROUND_HAZARD: char = '#';
const ELEVATED_HAZARD: char = 'v';
const GROUND: char = '=';
const GROUND_MARK: char = '_';

#[derive(Debug, Clone)]
pub struct AsciiSurface {
    pub cols: usize,
    pub rows: usize,
    /// Last rendered screen
    pub screen: String,
}

impl AsciiSurface {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            screen: String::new(),
        }
    }

    pub fn render(&self, frame: &Frame) -> String {
        let cell_w = frame.world_width / self.cols as f32;
        let cell_h = frame.world_height / self.rows as f32;
        let mut grid = vec![vec![' '; self.cols]; self.rows];

        // Ground strip with scrolling marks one tile apart
        let ground_row = ((frame.ground_line / cell_h).floor() as usize).min(self.rows);
        let tile = frame.ground_tile.max(1.0);
        for (r, row) in grid.iter_mut().enumerate().skip(ground_row) {
            for (c, cell) in row.iter_mut().enumerate() {
                let x = c as f32 * cell_w + frame.ground_offset;
                *cell = if r == ground_row && (x / tile).fract() < 0.25 {
                    GROUND_MARK
                } else {
                    GROUND
                };
            }
        }

        for entity in &frame.entities {
            let glyph = match entity {
                Entity::Player { .. } => PLAYER,
                Entity::Obstacle {
                    kind: ObstacleKind::Ground,
                    ..
                } => GROUND_HAZARD,
                Entity::Obstacle {
                    kind: ObstacleKind::Elevated,
                    ..
                } => ELEVATED_HAZARD,
            };
            self.fill(&mut grid, &entity.rect(), cell_w, cell_h, glyph);
        }

        let mut out: String = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>() + "\n")
            .collect();
        out.push_str(&format!("score {}  speed {:.1}  {:?}\n", frame.score, frame.speed, frame.phase));
        if let Some(board) = &frame.leaderboard {
            for (i, entry) in board.iter().enumerate() {
                out.push_str(&format!("{}. {} - {}\n", i + 1, entry.name, entry.score));
            }
        }
        out
    }

    fn fill(&self, grid: &mut [Vec<char>], rect: &Rect, cell_w: f32, cell_h: f32, glyph: char) {
        if rect.right() <= 0.0 || rect.left() >= cell_w * self.cols as f32 {
            return;
        }
        let to_col = |x: f32| (x / cell_w).floor().clamp(0.0, self.cols as f32) as usize;
        let to_row = |y: f32| (y / cell_h).floor().clamp(0.0, self.rows as f32) as usize;
        let (c0, c1) = (to_col(rect.left()), to_col(rect.right() - 0.01));
        let (r0, r1) = (to_row(rect.top()), to_row(rect.bottom() - 0.01));
        for row in grid.iter_mut().take((r1 + 1).min(self.rows)).skip(r0) {
            for cell in row.iter_mut().take((c1 + 1).min(self.cols)).skip(c0) {
                *cell = glyph;
            }
        }
    }
}

impl RenderSurface for AsciiSurface {
    fn present(&mut self, frame: &Frame) {
        self.screen = self.render(frame);
    }
}
