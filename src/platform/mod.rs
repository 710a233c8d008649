//! Platform abstraction layer
//!
//! Handles everything outside the simulation that feeds it:
//! - Input events (keyboard, scripts, autopilot)
//! - Time/ticks (frame pacing, fixed steps)

pub mod input;
pub mod time;

pub use input::{Autopilot, InputSource, ScriptedInput};
pub use time::{Clock, FixedStep, FramePacer};
