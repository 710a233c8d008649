//! Input sources
//!
//! A source is polled once per frame with the latest snapshot and returns the
//! events to feed into the next tick.

use std::collections::VecDeque;

use crate::consts::DEFAULT_PLAYER_NAME;
use crate::renderer::Frame;
use crate::sim::{GamePhase, InputEvent, ObstacleKind};

pub trait InputSource {
    fn poll(&mut self, frame: &Frame) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame events, then stays silent
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Type a name and confirm it in a single frame
    pub fn typed_name(name: &str) -> Vec<InputEvent> {
        name.chars()
            .map(InputEvent::TextInput)
            .chain(std::iter::once(InputEvent::Confirm))
            .collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _frame: &Frame) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Demo player: types its name, jumps over hazards it would hit, and restarts
/// a limited number of times before quitting.
#[derive(Debug, Clone)]
pub struct Autopilot {
    pub name: String,
    /// Jump when the next hazard is this many ticks of scroll away
    pub lead_ticks: f32,
    pub restarts_left: u32,
}

impl Autopilot {
    /// A name with nothing typeable falls back to the default, so the name
    /// prompt can always be confirmed
    pub fn new(name: &str, restarts: u32) -> Self {
        let name = if name.chars().any(|c| !c.is_control()) {
            name
        } else {
            DEFAULT_PLAYER_NAME
        };
        Self {
            name: name.to_string(),
            lead_ticks: 6.0,
            restarts_left: restarts,
        }
    }

    fn should_jump(&self, frame: &Frame) -> bool {
        let Some(player) = frame.player() else {
            return false;
        };
        // Top of the player's box when standing
        let standing_top = frame.ground_line - (player.bottom() - player.top());

        frame
            .obstacles()
            .filter(|(_, _, rect)| rect.right() > player.left())
            .filter(|(_, kind, rect)| match kind {
                ObstacleKind::Ground => true,
                ObstacleKind::Elevated => rect.bottom() > standing_top,
            })
            .map(|(_, _, rect)| rect.left() - player.right())
            .any(|gap| gap <= frame.speed * self.lead_ticks)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, frame: &Frame) -> Vec<InputEvent> {
        match frame.phase {
            GamePhase::NamingPlayer => ScriptedInput::typed_name(&self.name),
            GamePhase::Running if self.should_jump(frame) => vec![InputEvent::Jump],
            GamePhase::Running | GamePhase::Quit => Vec::new(),
            GamePhase::GameOver => {
                if self.restarts_left > 0 {
                    self.restarts_left -= 1;
                    vec![InputEvent::Restart]
                } else {
                    vec![InputEvent::Quit]
                }
            }
        }
    }
}
