//! Render snapshot and surfaces
//!
//! The simulation never draws. Each tick the loop captures a `Frame` and hands
//! it to a `RenderSurface`.

pub mod ascii;
pub mod frame;

pub use ascii::AsciiSurface;
pub use frame::Frame;

/// Anything that can display a frame
pub trait RenderSurface {
    fn present(&mut self, frame: &Frame);
}

/// Logs phase and score changes instead of drawing
#[derive(Debug, Default)]
pub struct LogSurface {
    last_phase: Option<crate::sim::GamePhase>,
    last_score: u32,
}

impl RenderSurface for LogSurface {
    fn present(&mut self, frame: &Frame) {
        if self.last_phase != Some(frame.phase) {
            log::info!("Phase {:?} at tick {}", frame.phase, frame.tick);
            if let Some(board) = &frame.leaderboard {
                for (i, entry) in board.iter().enumerate() {
                    log::info!("  {}. {} - {}", i + 1, entry.name, entry.score);
                }
            }
            self.last_phase = Some(frame.phase);
        }
        if frame.score != self.last_score {
            log::debug!("Score {} (speed {:.2})", frame.score, frame.speed);
            self.last_score = frame.score;
        }
    }
}
