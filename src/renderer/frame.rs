//! Per-tick render snapshot

use serde::{Deserialize, Serialize};

use crate::highscores::{Leaderboard, ScoreEntry};
use crate::sim::{Entity, GamePhase, GameState, ObstacleKind, Rect};

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub phase: GamePhase,
    /// Player first, then obstacles in spawn order
    pub entities: Vec<Entity>,
    pub score: u32,
    pub speed: f32,
    pub ground_offset: f32,
    pub ground_tile: f32,
    pub ground_line: f32,
    pub world_width: f32,
    pub world_height: f32,
    /// Name as typed so far (or the confirmed name)
    pub player_name: String,
    /// Top entries, present only on the game over screen
    pub leaderboard: Option<Vec<ScoreEntry>>,
}

impl Frame {
    pub fn capture(state: &GameState, leaderboard: Option<&Leaderboard>, rows: usize) -> Self {
        let show_board = state.phase == GamePhase::GameOver;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            entities: state.entities(),
            score: state.score,
            speed: state.speed,
            ground_offset: state.ground_offset,
            ground_tile: state.tuning.world.ground_tile,
            ground_line: state.tuning.world.ground_line(),
            world_width: state.tuning.world.width,
            world_height: state.tuning.world.height,
            player_name: state.player_name.clone(),
            leaderboard: leaderboard
                .filter(|_| show_board)
                .map(|board| board.top(rows).to_vec()),
        }
    }

    pub fn player(&self) -> Option<Rect> {
        self.entities.iter().find_map(|e| match e {
            Entity::Player { rect, .. } => Some(*rect),
            Entity::Obstacle { .. } => None,
        })
    }

    pub fn obstacles(&self) -> impl Iterator<Item = (u32, ObstacleKind, Rect)> + '_ {
        self.entities.iter().filter_map(|e| match e {
            Entity::Obstacle { id, kind, rect } => Some((*id, *kind, *rect)),
            Entity::Player { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_capture_running() {
        let mut state = GameState::new(1, Tuning::default(), false, "Ana");
        let id = state.next_entity_id();
        let ob = crate::sim::Obstacle::ground(id, 400.0, Vec2::new(18.0, 36.0), &state.tuning);
        state.obstacles.push(ob);

        let mut board = Leaderboard::new();
        board.add_score("Bea", 3);
        let frame = Frame::capture(&state, Some(&board), 5);

        assert_eq!(frame.phase, GamePhase::Running);
        assert_eq!(frame.ground_line, 320.0);
        assert_eq!(frame.player(), Some(state.player.rect()));
        assert_eq!(frame.obstacles().count(), 1);
        // Leaderboard only on game over
        assert!(frame.leaderboard.is_none());
    }

    #[test]
    fn test_capture_game_over_board() {
        let mut state = GameState::new(1, Tuning::default(), false, "Ana");
        state.phase = GamePhase::GameOver;
        let board = Leaderboard::parse_ranked("a,1\nb,2\nc,3\nd,4\ne,5\nf,6\n");
        let frame = Frame::capture(&state, Some(&board), 5);
        let rows = frame.leaderboard.unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ScoreEntry::new("f", 6));
    }
}
