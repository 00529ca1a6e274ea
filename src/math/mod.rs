//! 2D geometry for the playfield
//!
//! Canvas coordinates: origin top-left, +x right, +y down.
//! Vectors are `glam::Vec2`; this module adds the rectangle and circle
//! primitives plus a few scalar/vector helpers the actors need.

pub mod circle;
pub mod rect;

pub use circle::Circle;
pub use rect::Rect;

use glam::Vec2;

/// Move `value` toward zero by `amount` without crossing zero
#[inline]
pub fn to_zero(value: f32, amount: f32) -> f32 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else if value < 0.0 {
        (value + amount).min(0.0)
    } else {
        0.0
    }
}

/// Rescale `v` to length `max` if it is longer, keeping its direction
#[inline]
pub fn clamp_speed(v: Vec2, max: f32) -> Vec2 {
    if v.length() > max {
        v.normalize_or_zero() * max
    } else {
        v
    }
}

/// Clamp x to `[xmin, xmax]`
#[inline]
pub fn clamp_x(v: Vec2, xmin: f32, xmax: f32) -> Vec2 {
    Vec2::new(clamp_scalar(v.x, xmin, xmax), v.y)
}

/// Clamp y to `[ymin, ymax]`
#[inline]
pub fn clamp_y(v: Vec2, ymin: f32, ymax: f32) -> Vec2 {
    Vec2::new(v.x, clamp_scalar(v.y, ymin, ymax))
}

/// Clamp both components independently
#[inline]
pub fn clamp_xy(v: Vec2, xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Vec2 {
    clamp_y(clamp_x(v, xmin, xmax), ymin, ymax)
}

/// Component-wise clamp between two corner vectors
#[inline]
pub fn clamp(v: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    clamp_xy(v, min.x, max.x, min.y, max.y)
}

/// Lower bound applied first, so an inverted range yields `max`
#[inline]
fn clamp_scalar(value: f32, min: f32, max: f32) -> f32 {
    let mut value = value;
    if value < min {
        value = min;
    }
    if value > max {
        value = max;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_zero_does_not_cross() {
        assert_eq!(to_zero(5.0, 2.0), 3.0);
        assert_eq!(to_zero(1.0, 2.0), 0.0);
        assert_eq!(to_zero(-5.0, 2.0), -3.0);
        assert_eq!(to_zero(-1.0, 2.0), 0.0);
        assert_eq!(to_zero(0.0, 2.0), 0.0);
    }

    #[test]
    fn test_clamp_speed_keeps_direction() {
        let v = clamp_speed(Vec2::new(30.0, 40.0), 15.0);
        assert!((v.length() - 15.0).abs() < 0.0001);
        assert!((v.x - 9.0).abs() < 0.0001);
        assert!((v.y - 12.0).abs() < 0.0001);

        // Under the limit: untouched
        let slow = Vec2::new(3.0, 4.0);
        assert_eq!(clamp_speed(slow, 15.0), slow);

        // Zero vector stays zero
        assert_eq!(clamp_speed(Vec2::ZERO, 15.0), Vec2::ZERO);
    }

    #[test]
    fn test_clamp_inverted_range_yields_max() {
        assert_eq!(clamp_x(Vec2::new(5.0, 1.0), 10.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(clamp_y(Vec2::new(1.0, 50.0), 10.0, 0.0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_clamp_components() {
        let v = clamp(Vec2::new(-5.0, 50.0), Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0));
        assert_eq!(v, Vec2::new(0.0, 20.0));

        let v = clamp_x(Vec2::new(15.0, 99.0), 0.0, 10.0);
        assert_eq!(v, Vec2::new(10.0, 99.0));
    }
}
