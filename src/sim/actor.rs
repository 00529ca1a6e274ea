//! Actor base shared by the player, enemies and lasers

use glam::Vec2;
use rand_pcg::Pcg32;

use super::state::GameEvent;
use crate::engine::{Scene, Sprite, SpriteKind};
use crate::math::Rect;
use crate::settings::Settings;

/// Everything an actor may look at or touch during its update
pub struct FrameContext<'a> {
    pub scene: &'a Scene,
    pub settings: &'a Settings,
    /// Seconds since the previous frame
    pub delta: f32,
    pub rng: &'a mut Pcg32,
    pub events: &'a mut Vec<GameEvent>,
}

/// A sprite with a liveness flag. Dead actors are neither updated nor drawn.
#[derive(Debug, Clone)]
pub struct Actor {
    sprite: Sprite,
    alive: bool,
}

impl Actor {
    pub fn new(kind: SpriteKind) -> Self {
        Self {
            sprite: Sprite::new(kind),
            alive: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    /// Collision box, always in step with the sprite
    pub fn bounds(&self) -> Rect {
        Rect::from_position_size(self.sprite.position(), self.sprite.size())
    }

    pub fn width(&self) -> f32 {
        self.sprite.width()
    }

    pub fn height(&self) -> f32 {
        self.sprite.height()
    }

    pub fn position(&self) -> Vec2 {
        self.sprite.position()
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.sprite.set_position(x, y);
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.sprite.move_by(dx, dy);
    }
}

/// Per-frame behaviour layered over [`Actor`]
pub trait Behavior {
    fn actor(&self) -> &Actor;

    fn actor_mut(&mut self) -> &mut Actor;

    fn update(&mut self, _ctx: &mut FrameContext<'_>) {}

    fn is_alive(&self) -> bool {
        self.actor().is_alive()
    }

    fn bounds(&self) -> Rect {
        self.actor().bounds()
    }
}
