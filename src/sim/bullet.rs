//! Player laser

use super::actor::{Actor, Behavior, FrameContext};
use crate::consts::PARK_POSITION;
use crate::engine::SpriteKind;

/// A laser shot. Flies right until it leaves the scene, then parks.
#[derive(Debug, Clone)]
pub struct Bullet {
    actor: Actor,
}

impl Default for Bullet {
    fn default() -> Self {
        Self::new()
    }
}

impl Bullet {
    pub fn new() -> Self {
        let mut actor = Actor::new(SpriteKind::Laser);
        actor.set_position(PARK_POSITION.x, PARK_POSITION.y);
        Self { actor }
    }

    /// Take the bullet out of play
    pub fn retire(&mut self) {
        self.actor.set_alive(false);
        self.actor.set_position(PARK_POSITION.x, PARK_POSITION.y);
    }
}

impl Behavior for Bullet {
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
        self.actor.move_by(ctx.settings.laser_speed * ctx.delta, 0.0);
        if !self.actor.bounds().intersects_rect(ctx.scene.bounds()) {
            self.retire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Scene;
    use crate::settings::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn step(bullet: &mut Bullet, scene: &Scene, delta: f32) {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut ctx = FrameContext {
            scene,
            settings: &settings,
            delta,
            rng: &mut rng,
            events: &mut events,
        };
        bullet.update(&mut ctx);
    }

    #[test]
    fn test_new_bullet_is_parked() {
        let bullet = Bullet::new();
        assert!(!bullet.is_alive());
        assert_eq!(bullet.actor().position(), PARK_POSITION);
    }

    #[test]
    fn test_parked_bullet_does_not_move() {
        let scene = Scene::new(800.0, 600.0);
        let mut bullet = Bullet::new();
        step(&mut bullet, &scene, 0.1);
        assert_eq!(bullet.actor().position(), PARK_POSITION);
    }

    #[test]
    fn test_flies_right_then_retires() {
        let scene = Scene::new(800.0, 600.0);
        let mut bullet = Bullet::new();
        bullet.actor_mut().set_position(100.0, 300.0);
        bullet.actor_mut().set_alive(true);

        step(&mut bullet, &scene, 0.1);
        assert!(bullet.is_alive());
        assert!((bullet.actor().position().x - 170.0).abs() < 0.001);

        // One second at 700 px/s leaves an 800 px scene
        step(&mut bullet, &scene, 1.0);
        assert!(!bullet.is_alive());
        assert_eq!(bullet.actor().position(), PARK_POSITION);
    }
}
