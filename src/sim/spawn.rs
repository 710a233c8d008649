//! Obstacle spawning
//!
//! Spawns are driven by scrolled distance, not time. After each spawn a new
//! countdown is drawn from a range that tightens as the score climbs, never
//! below the configured floor.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::entity::Obstacle;
use crate::tuning::{SpawnTuning, Tuning};

/// Countdown to the next obstacle, in world-scroll units
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    pub distance_to_next: f32,
}

impl SpawnScheduler {
    /// First countdown comes from the unshrunk range
    pub fn new<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        Self {
            distance_to_next: next_spawn_distance(0, rng, &tuning.spawn),
        }
    }

    /// Consume `speed` units of scroll; returns a new obstacle when the countdown runs out
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        speed: f32,
        score: u32,
        id: u32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<Obstacle> {
        self.distance_to_next -= speed;
        if self.distance_to_next > 0.0 {
            return None;
        }

        let obstacle = spawn_obstacle(id, rng, tuning);
        self.distance_to_next = next_spawn_distance(score, rng, &tuning.spawn);
        log::debug!(
            "Spawned {:?} #{} ({}x{}), next in {:.0}",
            obstacle.kind,
            obstacle.id,
            obstacle.size.x,
            obstacle.size.y,
            self.distance_to_next
        );
        Some(obstacle)
    }
}

/// Draw the next spawn distance for the given score.
///
/// Both bounds shrink linearly with score. If they cross, they are swapped.
/// The result is clamped to `floor`.
pub fn next_spawn_distance<R: Rng + ?Sized>(score: u32, rng: &mut R, spawn: &SpawnTuning) -> f32 {
    let score = score as f32;
    let mut lo = spawn.min_distance - score * spawn.min_shrink_per_point;
    let mut hi = spawn.max_distance - score * spawn.max_shrink_per_point;
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    let distance = if lo.is_finite() && hi.is_finite() {
        rng.random_range(lo..=hi)
    } else {
        spawn.floor
    };
    distance.max(spawn.floor)
}

/// Create an obstacle at the right edge of the world, kind and size chosen at random
pub fn spawn_obstacle<R: Rng + ?Sized>(id: u32, rng: &mut R, tuning: &Tuning) -> Obstacle {
    let x = tuning.world.spawn_x();
    let catalog = &tuning.obstacles;

    if rng.random_bool(tuning.spawn.ground_weight.clamp(0.0, 1.0)) {
        let w = pick(rng, &catalog.ground_widths, 24.0);
        let h = pick(rng, &catalog.ground_heights, 48.0);
        Obstacle::ground(id, x, Vec2::new(w, h), tuning)
    } else {
        let elevation = pick(rng, &catalog.elevations, 60.0);
        let size = Vec2::new(catalog.elevated_width, catalog.elevated_height);
        Obstacle::elevated(id, x, size, elevation, tuning)
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[f32], fallback: f32) -> f32 {
    values.choose(rng).copied().unwrap_or(fallback)
}
