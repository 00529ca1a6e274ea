//! Enemy ship that crosses the scene right to left

use rand::Rng;

use super::actor::{Actor, Behavior, FrameContext};
use crate::engine::{Scene, SpriteKind};
use crate::settings::Settings;

/// Flies left across the scene and wraps back in from the right
#[derive(Debug, Clone)]
pub struct Enemy {
    actor: Actor,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy {
    pub fn new() -> Self {
        Self {
            actor: Actor::new(SpriteKind::Enemy),
        }
    }

    /// Bring the enemy to life at a random point inside the scene
    pub fn spawn_inside<R: Rng + ?Sized>(&mut self, scene: &Scene, rng: &mut R) {
        let p = scene.bounds().random_point(rng);
        self.actor.set_position(p.x, p.y);
        self.actor.set_alive(true);
    }

    /// Re-enter just past the right edge at a random height
    pub fn respawn<R: Rng + ?Sized>(&mut self, scene: &Scene, settings: &Settings, rng: &mut R) {
        let max_y = (scene.height() - self.actor.height()).max(0.0);
        let y = rng.random::<f32>() * max_y;
        self.actor
            .set_position(scene.width() + settings.enemy_respawn_offset, y);
        self.actor.set_alive(true);
    }
}

impl Behavior for Enemy {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        if !self.actor.is_alive() {
            return;
        }
        self.actor.move_by(-ctx.settings.enemy_speed * ctx.delta, 0.0);
        // Only leaving through the left edge counts; a fresh respawn sits past the right one
        if self.actor.bounds().right() < ctx.scene.bounds().left() {
            self.respawn(ctx.scene, ctx.settings, &mut *ctx.rng);
        }
    }
}
