//! Runner Sim - simulation core for single-screen arcade runner games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player-facing configuration loaded from disk
//! - `highscores`: Ranked leaderboard and its persistence
//! - `platform`: Input sources and frame pacing
//! - `renderer`: Per-tick render snapshot and surface abstraction
//! - `game`: Loop controller tying the above together

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::GameLoop;
pub use highscores::{FileStore, Leaderboard, LeaderboardFormat, ScoreEntry, ScoreStore};
pub use settings::Settings;
pub use tuning::{Tuning, Variant};

/// Default world and balance constants (Dino variant)
pub mod consts {
    /// Visible world size
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;
    /// Height of the ground strip; the ground line sits at WORLD_HEIGHT - GROUND_HEIGHT
    pub const GROUND_HEIGHT: f32 = 80.0;
    /// Frame rate cap
    pub const FPS: u32 = 60;

    /// Added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.8;
    /// Negative = upward
    pub const JUMP_VELOCITY: f32 = -15.0;

    /// Player box
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// Scroll speed (units per tick) and its growth per elapsed millisecond
    pub const SPEED_START: f32 = 6.0;
    pub const SPEED_ACCEL: f32 = 0.0012;

    /// Spawn distance range and its hard floor
    pub const SPAWN_MIN: f32 = 900.0;
    pub const SPAWN_MAX: f32 = 1600.0;
    pub const SPAWN_FLOOR: f32 = 450.0;

    /// Obstacles enter this far past the right edge
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Obstacles are dropped once their right edge is left of this
    pub const DESPAWN_X: f32 = -50.0;

    /// Ground pattern repeat width
    pub const GROUND_TILE: f32 = 40.0;

    /// Leaderboard rows shown on the game over screen
    pub const LEADERBOARD_DISPLAY: usize = 5;
    /// Longest accepted player name
    pub const MAX_NAME_LEN: usize = 10;
    /// Name used when none is configured
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
}
