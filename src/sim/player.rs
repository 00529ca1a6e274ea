//! The dude: keyboard-steered, inertia-damped, fires lasers

use glam::Vec2;

use super::actor::{Actor, Behavior, FrameContext};
use super::bullet::Bullet;
use super::ringbuffer::Ringbuffer;
use super::state::GameEvent;
use crate::engine::{Key, Scene, SpriteKind};
use crate::math::{clamp_speed, to_zero};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Player {
    actor: Actor,
    /// Per-frame displacement in pixels
    inertia: Vec2,
    /// Seconds until the next shot is allowed (fires once below zero)
    laser_timer: f32,
    lasers: Ringbuffer<Bullet>,
}

impl Player {
    pub fn new(scene: &Scene, settings: &Settings) -> Self {
        let mut player = Self {
            actor: Actor::new(SpriteKind::Dude),
            inertia: Vec2::ZERO,
            laser_timer: 0.0,
            lasers: Ringbuffer::new(settings.laser_pool_size, Bullet::new),
        };
        player.spawn(scene, settings);
        player
    }

    /// Place at the left edge, vertically centred, with no momentum
    pub fn spawn(&mut self, scene: &Scene, settings: &Settings) {
        let y = (scene.height() - self.actor.height()) / 2.0;
        self.actor.set_position(settings.player_spawn_x, y);
        self.actor.set_alive(true);
        self.inertia = Vec2::ZERO;
        self.laser_timer = 0.0;
    }

    pub fn inertia(&self) -> Vec2 {
        self.inertia
    }

    pub fn lasers(&self) -> &Ringbuffer<Bullet> {
        &self.lasers
    }

    pub fn lasers_mut(&mut self) -> &mut Ringbuffer<Bullet> {
        &mut self.lasers
    }

    /// Summed acceleration from the held arrow keys
    fn steering(scene: &Scene, accel: f32) -> Vec2 {
        let mut d = Vec2::ZERO;
        if scene.is_key_down(Key::Left) {
            d.x -= accel;
        }
        if scene.is_key_down(Key::Right) {
            d.x += accel;
        }
        if scene.is_key_down(Key::Up) {
            d.y -= accel;
        }
        if scene.is_key_down(Key::Down) {
            d.y += accel;
        }
        d
    }

    fn fire(&mut self, events: &mut Vec<GameEvent>) {
        let origin = self.actor.bounds();
        let Some(laser) = self.lasers.get_next() else {
            return;
        };
        let x = origin.right();
        let y = origin.center().y - laser.actor().height() / 2.0;
        laser.actor_mut().set_position(x, y);
        laser.actor_mut().set_alive(true);
        events.push(GameEvent::LaserFired {
            position: Vec2::new(x, y),
        });
    }
}

impl Behavior for Player {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let settings = ctx.settings;
        let delta = ctx.delta;
        let scene = ctx.scene;

        let input = Self::steering(scene, settings.player_acceleration);
        let friction = settings.player_friction * delta;

        if input.x == 0.0 {
            self.inertia.x = to_zero(self.inertia.x, friction);
        } else {
            self.inertia.x += input.x * delta;
        }
        if input.y == 0.0 {
            self.inertia.y = to_zero(self.inertia.y, friction);
        } else {
            self.inertia.y += input.y * delta;
        }

        self.inertia = clamp_speed(self.inertia, settings.player_max_speed);
        self.actor.move_by(self.inertia.x, self.inertia.y);

        // Keep the dude on screen; hitting a wall kills that axis' momentum
        let mut bounds = self.actor.bounds();
        if scene.bounds().confine_x(&mut bounds) {
            self.inertia.x = 0.0;
        }
        if scene.bounds().confine_y(&mut bounds) {
            self.inertia.y = 0.0;
        }
        self.actor.set_position(bounds.position.x, bounds.position.y);

        if scene.is_key_down(Key::Space) && self.laser_timer < 0.0 {
            self.fire(ctx.events);
            self.laser_timer = settings.fire_cooldown;
        }
        self.laser_timer -= delta;

        for laser in self.lasers.iter_mut() {
            laser.update(ctx);
        }
    }
}
