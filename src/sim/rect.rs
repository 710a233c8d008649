//! Axis-aligned rectangles
//!
//! Screen-style coordinates: x grows right, y grows down. `min` is the top-left
//! corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Inset;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Shrink by a fraction of width/height, keeping the centre fixed.
    ///
    /// An inset of 0.4 removes 40% of the width in total (20% per side).
    pub fn inset(&self, inset: Inset) -> Rect {
        let shrink = Vec2::new(self.size.x * inset.x, self.size.y * inset.y);
        let size = (self.size - shrink).max(Vec2::ZERO);
        Rect {
            min: self.center() - size * 0.5,
            size,
        }
    }

    /// No area on at least one axis
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap: rectangles that only share an edge do not collide, and
    /// an empty rectangle never collides
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
