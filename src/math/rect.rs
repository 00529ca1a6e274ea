//! Axis-aligned rectangle
//!
//! A rect is a top-left `position` plus a `size`. Sizes may be negative;
//! the containment and overlap tests normalize the corners first.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::circle::Circle;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Corners as (min, max) regardless of the sign of `size`
    fn extents(&self) -> (Vec2, Vec2) {
        let a = self.position;
        let b = self.position + self.size;
        (a.min(b), a.max(b))
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not
    pub fn is_point_inside(&self, v: Vec2) -> bool {
        let (min, max) = self.extents();
        v.x >= min.x && v.x < max.x && v.y >= min.y && v.y < max.y
    }

    /// Closed-interval overlap, so rects sharing an edge intersect
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        let (a_min, a_max) = self.extents();
        let (b_min, b_max) = other.extents();

        let x_overlap = !(a_min.x > b_max.x || a_max.x < b_min.x);
        let y_overlap = !(a_min.y > b_max.y || a_max.y < b_min.y);

        x_overlap && y_overlap
    }

    /// Overlap with a circle, via the rect point closest to the circle centre
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let (min, max) = self.extents();
        let closest = circle.position.clamp(min, max);
        circle.is_point_inside(closest)
    }

    /// Uniform random point in `[x, x + w) x [y, y + h)`
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let (min, max) = self.extents();
        Vec2::new(
            sample_axis(rng, min.x, max.x),
            sample_axis(rng, min.y, max.y),
        )
    }

    /// Shift `r` horizontally until it lies within `self`.
    ///
    /// Returns true if `r` was moved. A rect wider than `self` is aligned to
    /// the left edge.
    pub fn confine_x(&self, r: &mut Rect) -> bool {
        if r.left() < self.left() || r.size.x > self.size.x {
            let moved = r.position.x != self.position.x;
            r.position.x = self.position.x;
            return moved;
        }
        if r.right() > self.right() {
            r.position.x = self.right() - r.size.x;
            return true;
        }
        false
    }

    /// Vertical counterpart of [`Rect::confine_x`]
    pub fn confine_y(&self, r: &mut Rect) -> bool {
        if r.top() < self.top() || r.size.y > self.size.y {
            let moved = r.position.y != self.position.y;
            r.position.y = self.position.y;
            return moved;
        }
        if r.bottom() > self.bottom() {
            r.position.y = self.bottom() - r.size.y;
            return true;
        }
        false
    }
}

/// Uniform in `[min, max)`; a sample rounded up onto `max` wraps to `min`
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let v = min + rng.random::<f32>() * (max - min);
    if v < max { v } else { min }
}
