//! Game state and the draw list handed to the renderer

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Behavior;
use super::enemy::Enemy;
use super::player::Player;
use super::ringbuffer::Ringbuffer;
use crate::engine::{Scene, Sprite, Timer};
use crate::settings::Settings;

/// Things that happened during a frame, drained by the frontend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A laser left the dude's cannon
    LaserFired { position: Vec2 },
    /// A laser hit enemy `enemy` (pool index)
    EnemyDestroyed { enemy: usize, position: Vec2 },
    /// Enemy `enemy` rammed the dude
    PlayerHit { enemy: usize, position: Vec2 },
}

/// Complete game state
pub struct GameState {
    pub seed: u64,
    pub settings: Settings,
    pub scene: Scene,
    pub timer: Timer,
    pub player: Player,
    pub enemies: Ringbuffer<Enemy>,
    /// Frames simulated so far
    pub frame: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game on a `width` x `height` canvas
    pub fn new(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
        let scene = Scene::new(width, height);
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Player::new(&scene, &settings);
        let enemies = Ringbuffer::new(settings.enemy_pool_size, || {
            let mut enemy = Enemy::new();
            enemy.spawn_inside(&scene, &mut rng);
            enemy
        });

        log::debug!(
            "Game state created: {}x{}, {} enemies, {} lasers, seed {}",
            width,
            height,
            enemies.len(),
            player.lasers().len(),
            seed
        );

        Self {
            seed,
            settings,
            scene,
            timer: Timer::new(),
            player,
            enemies,
            frame: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Hand over the events gathered since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events not yet drained
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Alive sprites in draw order: dude, enemies, lasers
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> + '_ {
        let player = std::iter::once(&self.player).filter(|p| p.is_alive());
        let enemies = self.enemies.iter().filter(|e| e.is_alive());
        let lasers = self.player.lasers().iter().filter(|l| l.is_alive());

        player
            .map(|p| p.actor().sprite())
            .chain(enemies.map(|e| e.actor().sprite()))
            .chain(lasers.map(|l| l.actor().sprite()))
    }

    /// Alive enemies
    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    /// Lasers currently in flight
    pub fn active_lasers(&self) -> usize {
        self.player
            .lasers()
            .iter()
            .filter(|l| l.is_alive())
            .count()
    }
}
