//! Drawable sprite: kind, position, size and scale

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What a sprite depicts; picks its colour when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Dude,
    Enemy,
    Laser,
}

impl SpriteKind {
    /// Native pixel size of the sprite
    pub fn size(self) -> Vec2 {
        use crate::consts::*;
        match self {
            SpriteKind::Dude => DUDE_SIZE,
            SpriteKind::Enemy => ENEMY_SIZE,
            SpriteKind::Laser => LASER_SIZE,
        }
    }
}

/// A drawable rectangle at a position, with a draw scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    position: Vec2,
    size: Vec2,
    scale: f32,
}

impl Sprite {
    pub fn new(kind: SpriteKind) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            size: kind.size(),
            scale: 1.0,
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Copy another sprite's position
    pub fn place_at(&mut self, other: &Sprite) {
        self.position = other.position;
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// On-screen extent (size times scale)
    pub fn draw_size(&self) -> Vec2 {
        self.size * self.scale
    }
}
