//! Frame timing
//!
//! A `Clock` yields the milliseconds elapsed since the previous frame. The
//! simulation only uses this for the speed ramp.

use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Block until the next frame is due and return elapsed milliseconds
    fn tick(&mut self) -> f32;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn tick(&mut self) -> f32 {
        (**self).tick()
    }
}

/// Real-time pacer capped at a fixed frame rate
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }
}

impl Clock for FramePacer {
    fn tick(&mut self) -> f32 {
        let due = self.last + self.frame;
        let now = Instant::now();
        if now < due {
            thread::sleep(due - now);
        }
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed.as_secs_f32() * 1000.0
    }
}

/// Headless clock: every frame takes exactly `ms`
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    pub ms: f32,
}

impl FixedStep {
    pub fn from_fps(fps: u32) -> Self {
        Self {
            ms: 1000.0 / fps.max(1) as f32,
        }
    }
}

impl Clock for FixedStep {
    fn tick(&mut self) -> f32 {
        self.ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step() {
        let mut clock = FixedStep::from_fps(50);
        assert_eq!(clock.tick(), 20.0);
        assert_eq!(clock.tick(), 20.0);
    }

    #[test]
    fn test_pacer_waits_for_frame() {
        let mut pacer = FramePacer::new(200);
        let elapsed = pacer.tick();
        assert!(elapsed >= 4.9, "elapsed {}", elapsed);
        let elapsed = pacer.tick();
        assert!(elapsed >= 4.9, "elapsed {}", elapsed);
    }
}
