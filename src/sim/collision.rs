//! Collision detection between the player and obstacles
//!
//! Both sides are tested with shrunk hit rectangles so grazing a sprite's
//! corner does not end the run.

use super::entity::{Obstacle, Player};
use super::rect::Rect;
use crate::tuning::Tuning;

/// Axis-aligned overlap test (x-ranges and y-ranges both intersect)
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Check the player against a single obstacle using hit rectangles
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    aabb_overlap(&player.hit_rect(tuning), &obstacle.hit_rect(tuning))
}

/// Index of the first obstacle (in spawn order) touching the player
pub fn first_collision(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<usize> {
    let player_hit = player.hit_rect(tuning);
    obstacles
        .iter()
        .position(|ob| aabb_overlap(&player_hit, &ob.hit_rect(tuning)))
}
