//! Data-driven game balance
//!
//! Every number the simulation reads lives here so the two game variants can
//! differ by data alone. `Tuning::default()` is the Dino preset.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game variant presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    #[default]
    Dino,
    Hugo,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dino => "Dino",
            Variant::Hugo => "Hugo",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dino" => Some(Variant::Dino),
            "hugo" => Some(Variant::Hugo),
            _ => None,
        }
    }

    /// Balance preset for this variant
    pub fn tuning(&self) -> Tuning {
        match self {
            Variant::Dino => Tuning::default(),
            Variant::Hugo => Tuning::hugo(),
        }
    }
}

/// Fraction of a rectangle's width/height removed for its hit rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Inset {
    pub x: f32,
    pub y: f32,
}

impl Inset {
    pub const NONE: Inset = Inset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// World geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    pub spawn_margin: f32,
    pub despawn_x: f32,
    pub ground_tile: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            despawn_x: DESPAWN_X,
            ground_tile: GROUND_TILE,
        }
    }
}

impl WorldTuning {
    /// y coordinate of the world floor
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height - self.ground_height
    }

    /// x coordinate where new obstacles appear (left edge)
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.width + self.spawn_margin
    }
}

/// Player physics and dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// How far above the ground line the player's feet start
    pub start_height: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            start_height: 0.0,
        }
    }
}

/// Scroll speed ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTuning {
    pub start: f32,
    /// Added per elapsed millisecond of wall-clock time
    pub accel_per_ms: f32,
}

impl Default for SpeedTuning {
    fn default() -> Self {
        Self {
            start: SPEED_START,
            accel_per_ms: SPEED_ACCEL,
        }
    }
}

/// Spawn distance policy and kind weighting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Lower bound shrinks by this much per point scored
    pub min_shrink_per_point: f32,
    /// Upper bound shrinks by this much per point scored
    pub max_shrink_per_point: f32,
    /// Spawn distance never drops below this
    pub floor: f32,
    /// Probability that a spawn is a ground hazard (rest are elevated)
    pub ground_weight: f64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            min_distance: SPAWN_MIN,
            max_distance: SPAWN_MAX,
            min_shrink_per_point: 0.5,
            max_shrink_per_point: 0.06,
            floor: SPAWN_FLOOR,
            ground_weight: 0.85,
        }
    }
}

/// Discrete obstacle size sets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleCatalog {
    pub ground_widths: Vec<f32>,
    pub ground_heights: Vec<f32>,
    pub elevated_width: f32,
    pub elevated_height: f32,
    /// Height of an elevated hazard's top edge above the ground line
    pub elevations: Vec<f32>,
}

impl Default for ObstacleCatalog {
    fn default() -> Self {
        Self {
            ground_widths: vec![18.0, 24.0, 30.0],
            ground_heights: vec![36.0, 48.0, 56.0],
            elevated_width: 34.0,
            elevated_height: 24.0,
            elevations: vec![60.0, 80.0],
        }
    }
}

/// Hit rectangle insets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    pub player: Inset,
    pub ground: Inset,
    pub elevated: Inset,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            player: Inset::new(0.4, 0.2),
            ground: Inset::new(0.2, 0.2),
            elevated: Inset::new(0.6, 0.6),
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub physics: PhysicsTuning,
    pub speed: SpeedTuning,
    pub spawn: SpawnTuning,
    pub obstacles: ObstacleCatalog,
    pub collision: CollisionTuning,
}

impl Tuning {
    /// Hugo's Adventure: coin-flip spawns, steeper ramp, one box size, a low "mouse"
    pub fn hugo() -> Self {
        Self {
            world: WorldTuning {
                despawn_x: 0.0,
                ..WorldTuning::default()
            },
            physics: PhysicsTuning {
                player_width: 48.0,
                player_height: 60.0,
                start_height: 60.0,
                ..PhysicsTuning::default()
            },
            speed: SpeedTuning::default(),
            spawn: SpawnTuning {
                min_shrink_per_point: 5.0,
                max_shrink_per_point: 6.0,
                ground_weight: 0.5,
                ..SpawnTuning::default()
            },
            obstacles: ObstacleCatalog {
                ground_widths: vec![40.0],
                ground_heights: vec![60.0],
                elevated_width: 36.0,
                elevated_height: 24.0,
                elevations: vec![12.0],
            },
            collision: CollisionTuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::from_name("HUGO"), Some(Variant::Hugo));
        assert_eq!(Variant::from_name("dino"), Some(Variant::Dino));
        assert_eq!(Variant::from_name("mario"), None);
        assert_eq!(Variant::from_name(Variant::Hugo.as_str()), Some(Variant::Hugo));
    }

    #[test]
    fn test_ground_line() {
        let world = WorldTuning::default();
        assert_eq!(world.ground_line(), 320.0);
        assert_eq!(world.spawn_x(), 820.0);
    }

    #[test]
    fn test_presets_differ_only_where_expected() {
        let dino = Variant::Dino.tuning();
        let hugo = Variant::Hugo.tuning();
        assert_eq!(dino.physics.gravity, hugo.physics.gravity);
        assert_eq!(dino.spawn.floor, hugo.spawn.floor);
        assert_eq!(dino.spawn.ground_weight, 0.85);
        assert_eq!(hugo.spawn.ground_weight, 0.5);
        assert_eq!(hugo.obstacles.ground_widths, vec![40.0]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"spawn": {"floor": 300.0}}"#).unwrap();
        assert_eq!(tuning.spawn.floor, 300.0);
        assert_eq!(tuning.spawn.min_distance, SPAWN_MIN);
        assert_eq!(tuning.physics.jump_velocity, JUMP_VELOCITY);
    }
}
