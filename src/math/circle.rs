//! Circle primitive

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle given by centre and radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            radius,
        }
    }

    /// Strict test: points on the rim are outside
    pub fn is_point_inside(&self, v: Vec2) -> bool {
        self.position.distance(v) < self.radius
    }

    pub fn intersects(&self, other: &Circle) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside() {
        let c = Circle::new(10.0, 10.0, 5.0);
        assert!(c.is_point_inside(Vec2::new(12.0, 12.0)));
        assert!(!c.is_point_inside(Vec2::new(15.0, 10.0)));
    }

    #[test]
    fn test_intersects() {
        let a = Circle::new(0.0, 0.0, 5.0);
        assert!(a.intersects(&Circle::new(8.0, 0.0, 4.0)));
        // Touching is not overlapping
        assert!(!a.intersects(&Circle::new(10.0, 0.0, 5.0)));
    }
}
