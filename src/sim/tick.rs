//! Fixed timestep simulation tick
//!
//! Core game loop step: input first, then the running pipeline
//! (speed, ground, physics, spawn, scroll/prune, collision, scoring).

use serde::{Deserialize, Serialize};

use super::collision::first_collision;
use super::physics::{step_player, try_jump};
use super::score::mark_passed;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_NAME_LEN;

/// Discrete input events consumed by a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Running only
    Jump,
    /// GameOver only
    Restart,
    /// Any phase
    Quit,
    /// NamingPlayer only
    TextInput(char),
    Backspace,
    Confirm,
}

/// Advance the session by one frame.
///
/// `elapsed_ms` is the wall-clock time since the previous frame and only feeds
/// the speed ramp; gravity and scrolling are per tick.
pub fn tick(state: &mut GameState, inputs: &[InputEvent], elapsed_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for input in inputs {
        apply_input(state, input, &mut events);
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    // Difficulty ramp is wall-clock based
    state.speed += state.tuning.speed.accel_per_ms * elapsed_ms.max(0.0);
    let tile = state.tuning.world.ground_tile;
    state.ground_offset += state.speed;
    if tile > 0.0 {
        state.ground_offset %= tile;
    }

    step_player(&mut state.player, &state.tuning);

    let id = state.peek_entity_id();
    if let Some(obstacle) =
        state
            .spawner
            .advance(state.speed, state.score, id, &mut state.rng, &state.tuning)
    {
        state.next_entity_id();
        events.push(GameEvent::ObstacleSpawned {
            id: obstacle.id,
            kind: obstacle.kind,
        });
        state.obstacles.push(obstacle);
    }

    let despawn_x = state.tuning.world.despawn_x;
    for obstacle in &mut state.obstacles {
        obstacle.advance(state.speed);
    }
    state.obstacles.retain(|ob| ob.right() >= despawn_x);

    let hit = first_collision(&state.player, &state.obstacles, &state.tuning)
        .map(|index| state.obstacles[index].id);

    for id in mark_passed(&state.player, &mut state.obstacles) {
        state.score += 1;
        events.push(GameEvent::ObstaclePassed {
            id,
            score: state.score,
        });
    }

    if let Some(id) = hit {
        state.phase = GamePhase::GameOver;
        state.deaths += 1;
        log::info!(
            "Game over for {} with score {} (death #{})",
            state.player_name,
            state.score,
            state.deaths
        );
        events.push(GameEvent::Collided { id });
        events.push(GameEvent::GameOver {
            name: state.player_name.clone(),
            score: state.score,
            deaths: state.deaths,
        });
    }

    events
}

fn apply_input(state: &mut GameState, input: &InputEvent, events: &mut Vec<GameEvent>) {
    match (state.phase, input) {
        (GamePhase::Quit, _) => {}
        (_, InputEvent::Quit) => {
            state.phase = GamePhase::Quit;
            events.push(GameEvent::Quit);
        }
        (GamePhase::NamingPlayer, InputEvent::TextInput(c)) => {
            if state.player_name.chars().count() < MAX_NAME_LEN && !c.is_control() {
                state.player_name.push(*c);
            }
        }
        (GamePhase::NamingPlayer, InputEvent::Backspace) => {
            state.player_name.pop();
        }
        (GamePhase::NamingPlayer, InputEvent::Confirm) => {
            if !state.player_name.is_empty() {
                state.phase = GamePhase::Running;
                log::info!("Player {} starting (seed {})", state.player_name, state.seed);
                events.push(GameEvent::NameConfirmed {
                    name: state.player_name.clone(),
                });
            }
        }
        (GamePhase::Running, InputEvent::Jump) => {
            if try_jump(&mut state.player, &state.tuning) {
                log::debug!("Jump at tick {}", state.time_ticks);
                events.push(GameEvent::Jumped);
            }
        }
        (GamePhase::GameOver, InputEvent::Restart) => {
            state.reset_run();
            log::info!("Restarted (deaths so far: {})", state.deaths);
            events.push(GameEvent::Restarted);
        }
        _ => {}
    }
}
