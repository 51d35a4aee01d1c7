//! Axis-aligned rectangle geometry
//!
//! Everything in the playfield is an axis-aligned box: the car, the falling
//! obstacles, and the road bounds the car is clamped into. Overlap is strict:
//! two boxes that merely share an edge do not collide.

use glam::Vec2;

/// An axis-aligned rectangle (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build a rect of the given size centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
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
        self.min + self.size / 2.0
    }

    /// Move the rect by a delta
    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
    }

    /// Strict axis-aligned overlap test (shared edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if this rect lies entirely within `bounds` (edges may touch)
    pub fn contained_in(&self, bounds: &Rect) -> bool {
        self.left() >= bounds.left()
            && self.right() <= bounds.right()
            && self.top() >= bounds.top()
            && self.bottom() <= bounds.bottom()
    }

    /// Push the rect back inside `bounds`, edge by edge
    ///
    /// Assumes the rect is no larger than the bounds on either axis.
    pub fn clamp_into(&mut self, bounds: &Rect) {
        if self.left() < bounds.left() {
            self.min.x = bounds.left();
        }
        if self.right() > bounds.right() {
            self.min.x = bounds.right() - self.size.x;
        }
        if self.top() < bounds.top() {
            self.min.y = bounds.top();
        }
        if self.bottom() > bounds.bottom() {
            self.min.y = bounds.bottom() - self.size.y;
        }
    }
}
