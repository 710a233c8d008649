//! Player and obstacle entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::{Inset, Tuning};

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// x = left edge, y = feet (bottom edge)
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    pub on_ground: bool,
}

impl Player {
    /// Fresh player standing at (or `start_height` above) the ground line
    pub fn new(tuning: &Tuning) -> Self {
        let ground = tuning.world.ground_line();
        let start_height = tuning.physics.start_height.max(0.0);
        Self {
            pos: Vec2::new(tuning.physics.player_x, ground - start_height),
            size: Vec2::new(tuning.physics.player_width, tuning.physics.player_height),
            vel_y: 0.0,
            on_ground: start_height == 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y - self.size.y, self.size.x, self.size.y)
    }

    pub fn hit_rect(&self, tuning: &Tuning) -> Rect {
        self.rect().inset(tuning.collision.player)
    }
}

/// Hazard category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground line
    Ground,
    /// Floats at a fixed height above the ground
    Elevated,
}

/// A scrolling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Scored already (never reverts)
    pub passed: bool,
}

impl Obstacle {
    /// Ground hazard with its left edge at `x`
    pub fn ground(id: u32, x: f32, size: Vec2, tuning: &Tuning) -> Self {
        let ground = tuning.world.ground_line();
        Self {
            id,
            kind: ObstacleKind::Ground,
            pos: Vec2::new(x, ground - size.y),
            size,
            passed: false,
        }
    }

    /// Elevated hazard whose top edge sits `elevation` above the ground line
    pub fn elevated(id: u32, x: f32, size: Vec2, elevation: f32, tuning: &Tuning) -> Self {
        let ground = tuning.world.ground_line();
        Self {
            id,
            kind: ObstacleKind::Elevated,
            pos: Vec2::new(x, ground - elevation),
            size,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn hit_rect(&self, tuning: &Tuning) -> Rect {
        let inset: Inset = match self.kind {
            ObstacleKind::Ground => tuning.collision.ground,
            ObstacleKind::Elevated => tuning.collision.elevated,
        };
        self.rect().inset(inset)
    }

    /// Scroll left by `speed`
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }
}

/// Tagged view of anything drawn in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    Player { rect: Rect, on_ground: bool },
    Obstacle { id: u32, kind: ObstacleKind, rect: Rect },
}

impl Entity {
    pub fn rect(&self) -> Rect {
        match self {
            Entity::Player { rect, .. } | Entity::Obstacle { rect, .. } => *rect,
        }
    }
}

impl From<&Player> for Entity {
    fn from(player: &Player) -> Self {
        Entity::Player {
            rect: player.rect(),
            on_ground: player.on_ground,
        }
    }
}

impl From<&Obstacle> for Entity {
    fn from(obstacle: &Obstacle) -> Self {
        Entity::Obstacle {
            id: obstacle.id,
            kind: obstacle.kind,
            rect: obstacle.rect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_on_ground() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        assert!(player.on_ground);
        assert_eq!(player.rect().bottom(), 320.0);
        assert_eq!(player.rect().top(), 320.0 - 48.0);
    }

    #[test]
    fn test_hugo_player_starts_airborne() {
        let tuning = Tuning::hugo();
        let player = Player::new(&tuning);
        assert!(!player.on_ground);
        assert_eq!(player.pos.y, 260.0);
    }

    #[test]
    fn test_obstacle_placement() {
        let tuning = Tuning::default();
        let cactus = Obstacle::ground(1, 820.0, Vec2::new(24.0, 48.0), &tuning);
        assert_eq!(cactus.rect().bottom(), 320.0);
        assert_eq!(cactus.right(), 844.0);

        let bird = Obstacle::elevated(2, 820.0, Vec2::new(34.0, 24.0), 60.0, &tuning);
        assert_eq!(bird.rect().top(), 260.0);
        assert_eq!(bird.rect().bottom(), 284.0);
    }

    #[test]
    fn test_hit_rect_uses_kind_inset() {
        let tuning = Tuning::default();
        let cactus = Obstacle::ground(1, 0.0, Vec2::new(50.0, 50.0), &tuning);
        let bird = Obstacle::elevated(2, 0.0, Vec2::new(50.0, 50.0), 80.0, &tuning);
        let close = |a: Vec2, b: Vec2| (a - b).abs().max_element() < 1e-4;
        assert!(close(cactus.hit_rect(&tuning).size, Vec2::new(40.0, 40.0)));
        let bird_hit = bird.hit_rect(&tuning);
        assert!(close(bird_hit.size, Vec2::splat(20.0)), "bird hit {:?}", bird_hit.size);
        assert!(close(bird_hit.center(), bird.rect().center()));
    }

    #[test]
    fn test_entity_view() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let entity = Entity::from(&player);
        assert!(matches!(entity, Entity::Player { on_ground: true, .. }));
        assert_eq!(entity.rect(), player.rect());
    }
}
