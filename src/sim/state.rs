//! Game state and core simulation types
//!
//! One `GameState` is a full session: the player, live obstacles, the spawn
//! countdown, difficulty, score and the seeded RNG. It replaces any
//! process-wide state so several sessions can run side by side in tests.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Obstacle, ObstacleKind, Player};
use super::spawn::SpawnScheduler;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Typing a name before the first run
    NamingPlayer,
    /// Active gameplay
    Running,
    /// Run ended, world frozen
    GameOver,
    /// Quit requested; terminal
    Quit,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    NameConfirmed { name: String },
    Jumped,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    ObstaclePassed { id: u32, score: u32 },
    Collided { id: u32 },
    /// Fired exactly once per run
    GameOver { name: String, score: u32, deaths: u32 },
    Restarted,
    Quit,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Re-enter `NamingPlayer` on restart
    pub prompt_name: bool,
    pub player_name: String,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: SpawnScheduler,
    /// World scroll in units per tick
    pub speed: f32,
    /// Ground pattern offset, wrapped to the tile width
    pub ground_offset: f32,
    pub score: u32,
    /// Game overs this session
    pub deaths: u32,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// New session. With `prompt_name` the session waits in `NamingPlayer`,
    /// otherwise it runs immediately as `default_name`.
    pub fn new(seed: u64, tuning: Tuning, prompt_name: bool, default_name: &str) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = SpawnScheduler::new(&mut rng, &tuning);
        let (phase, player_name) = if prompt_name {
            (GamePhase::NamingPlayer, String::new())
        } else {
            (GamePhase::Running, default_name.to_string())
        };

        Self {
            seed,
            rng,
            player: Player::new(&tuning),
            speed: tuning.speed.start,
            tuning,
            phase,
            prompt_name,
            player_name,
            obstacles: Vec::new(),
            spawner,
            ground_offset: 0.0,
            score: 0,
            deaths: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next spawned entity will get
    pub fn peek_entity_id(&self) -> u32 {
        self.next_id
    }

    /// Put the world back to its starting layout for another run.
    ///
    /// The RNG keeps its stream so consecutive runs differ. The name and death
    /// count survive.
    pub fn reset_run(&mut self) {
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.spawner = SpawnScheduler::new(&mut self.rng, &self.tuning);
        self.speed = self.tuning.speed.start;
        self.ground_offset = 0.0;
        self.score = 0;
        self.time_ticks = 0;
        self.next_id = 1;

        if self.prompt_name {
            self.player_name.clear();
            self.phase = GamePhase::NamingPlayer;
        } else {
            self.phase = GamePhase::Running;
        }
    }

    /// Player first, then obstacles in spawn order
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::from(&self.player))
            .chain(self.obstacles.iter().map(Entity::from))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
