//! Game loop controller
//!
//! Owns the session and the score store. Drives `sim::tick` once per frame,
//! records each finished run exactly once, and publishes frames.

use crate::highscores::{Leaderboard, ScoreStore, StoreError};
use crate::platform::{Clock, InputSource};
use crate::renderer::{Frame, RenderSurface};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, tick};

/// Result of `GameLoop::run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub final_score: u32,
    pub best_score: u32,
    pub deaths: u32,
}

pub struct GameLoop<S: ScoreStore> {
    state: GameState,
    store: S,
    /// Board shown on the game over screen
    leaderboard: Option<Leaderboard>,
    display_rows: usize,
}

impl<S: ScoreStore> GameLoop<S> {
    pub fn new(state: GameState, store: S, display_rows: usize) -> Self {
        Self {
            state,
            store,
            leaderboard: None,
            display_rows,
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64, store: S) -> Self {
        let state = GameState::new(
            seed,
            settings.tuning(),
            settings.prompt_name,
            &settings.player_name,
        );
        log::info!(
            "{} session ready (seed {}, name prompt {})",
            settings.variant.as_str(),
            seed,
            settings.prompt_name
        );
        Self::new(state, store, settings.leaderboard_display)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        self.leaderboard.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == GamePhase::Quit
    }

    /// Run one frame.
    ///
    /// A failed save is returned after the session has already moved to
    /// `GameOver`; it will not be retried.
    pub fn step(&mut self, inputs: &[InputEvent], elapsed_ms: f32) -> Result<Vec<GameEvent>, StoreError> {
        let events = tick(&mut self.state, inputs, elapsed_ms);

        for event in &events {
            match event {
                GameEvent::GameOver {
                    name,
                    score,
                    deaths,
                } => match self.store.record(name, *score, *deaths) {
                    Ok(board) => self.leaderboard = Some(board),
                    Err(e) => {
                        log::error!("Could not save score {} for {}: {}", score, name, e);
                        self.leaderboard = self.store.load().ok();
                        return Err(e);
                    }
                },
                GameEvent::Restarted => self.leaderboard = None,
                _ => {}
            }
        }

        Ok(events)
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state, self.leaderboard.as_ref(), self.display_rows)
    }

    /// Drive the loop until quit or `max_ticks` frames
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        surface: &mut impl RenderSurface,
        clock: &mut impl Clock,
        max_ticks: Option<u64>,
    ) -> Result<RunSummary, StoreError> {
        let mut ticks = 0;
        let mut best_score = 0;
        let mut frame = self.frame();
        surface.present(&frame);

        while !self.is_finished() && max_ticks.is_none_or(|max| ticks < max) {
            let inputs = input.poll(&frame);
            let elapsed_ms = clock.tick();
            self.step(&inputs, elapsed_ms)?;
            best_score = best_score.max(self.state.score);

            frame = self.frame();
            surface.present(&frame);
            ticks += 1;
        }

        Ok(RunSummary {
            ticks,
            final_score: self.state.score,
            best_score,
            deaths: self.state.deaths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{FileStore, LeaderboardFormat, MemoryStore, ScoreEntry};
    use crate::platform::{Autopilot, FixedStep, ScriptedInput};
    use crate::renderer::LogSurface;
    use crate::sim::Obstacle;
    use crate::tuning::{Tuning, Variant};
    use glam::Vec2;

    fn doomed_loop(store: MemoryStore) -> GameLoop<MemoryStore> {
        let mut state = GameState::new(1, Tuning::default(), false, "Ana");
        state.spawner.distance_to_next = f32::MAX;
        let id = state.next_entity_id();
        let ob = Obstacle::ground(id, 100.0, Vec2::new(24.0, 48.0), &state.tuning);
        state.obstacles.push(ob);
        GameLoop::new(state, store, 5)
    }

    #[test]
    fn test_game_over_saves_once() {
        let mut game = doomed_loop(MemoryStore::default());
        game.step(&[], 16.0).unwrap();
        assert!(game.state().is_over());
        assert_eq!(game.store().saves, 1);

        for _ in 0..20 {
            game.step(&[InputEvent::Jump], 16.0).unwrap();
        }
        assert_eq!(game.store().saves, 1);

        let frame = game.frame();
        assert_eq!(frame.leaderboard, Some(vec![ScoreEntry::new("Ana", 0)]));
    }

    #[test]
    fn test_restart_clears_board_and_runs_again() {
        let mut game = doomed_loop(MemoryStore::default());
        game.step(&[], 16.0).unwrap();
        game.step(&[InputEvent::Restart], 16.0).unwrap();
        assert_eq!(game.state().phase, GamePhase::Running);
        assert!(game.leaderboard().is_none());
        assert!(game.frame().leaderboard.is_none());
    }

    #[test]
    fn test_save_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(
            dir.path().join("no-such-dir").join("ranking.csv"),
            LeaderboardFormat::Ranked,
        );
        let mut state = GameState::new(1, Tuning::default(), false, "Ana");
        state.spawner.distance_to_next = f32::MAX;
        let id = state.next_entity_id();
        state
            .obstacles
            .push(Obstacle::ground(id, 100.0, Vec2::new(24.0, 48.0), &state.tuning));
        let mut game = GameLoop::new(state, store, 5);

        assert!(matches!(game.step(&[], 16.0), Err(StoreError::Write { .. })));
        assert!(game.state().is_over());
        // Frozen afterwards, no second attempt
        assert!(game.step(&[], 16.0).unwrap().is_empty());
    }

    #[test]
    fn test_file_round_trip_through_loop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.csv");
        std::fs::write(&path, "Ana,50\n").unwrap();

        let mut state = GameState::new(1, Tuning::default(), false, "Bea");
        state.spawner.distance_to_next = f32::MAX;
        state.score = 70;
        let id = state.next_entity_id();
        state
            .obstacles
            .push(Obstacle::ground(id, 100.0, Vec2::new(24.0, 48.0), &state.tuning));
        let mut game = GameLoop::new(state, FileStore::new(&path, LeaderboardFormat::Ranked), 5);
        game.step(&[], 16.0).unwrap();

        let board = game.frame().leaderboard.unwrap();
        assert_eq!(board, vec![ScoreEntry::new("Bea", 70), ScoreEntry::new("Ana", 50)]);
    }

    #[test]
    fn test_run_with_autopilot() {
        let settings = Settings::for_variant(Variant::Hugo);
        let mut game = GameLoop::from_settings(&settings, 42, MemoryStore::default());
        let mut bot = Autopilot::new("Bot", 2);
        let mut surface = LogSurface::default();
        let mut clock = FixedStep::from_fps(60);

        let summary = game
            .run(&mut bot, &mut surface, &mut clock, Some(200_000))
            .unwrap();
        assert!(game.is_finished());
        assert_eq!(summary.deaths, 3);
        assert_eq!(game.store().saves, 3);
        assert!(game.store().board.entries.iter().all(|e| e.name == "Bot"));
        assert!(summary.ticks < 200_000);
    }

    #[test]
    fn test_blank_name_still_leaves_prompt() {
        let settings = Settings {
            player_name: String::new(),
            ..Settings::for_variant(Variant::Hugo)
        };
        let mut game = GameLoop::from_settings(&settings, 8, MemoryStore::default());
        let mut bot = Autopilot::new(&settings.player_name, 0);
        let mut surface = LogSurface::default();
        let mut clock = FixedStep::from_fps(60);

        game.run(&mut bot, &mut surface, &mut clock, Some(50)).unwrap();
        assert_eq!(game.state().phase, GamePhase::Running);
        assert_eq!(game.state().player_name, crate::consts::DEFAULT_PLAYER_NAME);
        assert!(game.state().time_ticks > 0);
    }

    #[test]
    fn test_run_respects_tick_limit() {
        let mut game = GameLoop::from_settings(&Settings::default(), 3, MemoryStore::default());
        let mut input = ScriptedInput::default();
        let mut surface = LogSurface::default();
        let mut clock = FixedStep::from_fps(60);
        let summary = game
            .run(&mut input, &mut surface, &mut clock, Some(10))
            .unwrap();
        assert_eq!(summary.ticks, 10);
        assert_eq!(game.state().time_ticks, 10);
        assert_eq!(game.state().phase, GamePhase::Running);
    }
}
