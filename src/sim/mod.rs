//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick physics only (wall-clock time feeds the speed ramp alone)
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod entity;
pub mod physics;
pub mod rect;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, first_collision, player_hits_obstacle};
pub use entity::{Entity, Obstacle, ObstacleKind, Player};
pub use physics::{step_player, try_jump};
pub use rect::Rect;
pub use score::mark_passed;
pub use spawn::{SpawnScheduler, next_spawn_distance, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, tick};
