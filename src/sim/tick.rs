//! Per-frame update
//!
//! Advances the timer, updates every actor, then resolves collisions.

use super::actor::{Behavior, FrameContext};
use super::state::{GameEvent, GameState};

/// Advance the game to `timestamp` (ms, as given by `requestAnimationFrame`)
pub fn tick(state: &mut GameState, timestamp: f64) {
    state.timer.update(timestamp);
    let delta = state.timer.delta();
    state.frame += 1;

    {
        let mut ctx = FrameContext {
            scene: &state.scene,
            settings: &state.settings,
            delta,
            rng: &mut state.rng,
            events: &mut state.events,
        };

        state.player.update(&mut ctx);
        for enemy in state.enemies.iter_mut() {
            enemy.update(&mut ctx);
        }
    }

    resolve_collisions(state);
}

/// Laser vs enemy, then enemy vs dude. Linear scans over the pools.
fn resolve_collisions(state: &mut GameState) {
    let GameState {
        scene,
        settings,
        player,
        enemies,
        rng,
        events,
        ..
    } = state;

    for (idx, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.is_alive() {
            continue;
        }

        let enemy_bounds = enemy.bounds();
        let shot = player
            .lasers_mut()
            .iter_mut()
            .find(|laser| laser.is_alive() && laser.bounds().intersects_rect(&enemy_bounds));

        if let Some(laser) = shot {
            laser.retire();
            events.push(GameEvent::EnemyDestroyed {
                enemy: idx,
                position: enemy_bounds.center(),
            });
            enemy.respawn(scene, settings, &mut *rng);
            continue;
        }

        if player.is_alive() && player.bounds().intersects_rect(&enemy_bounds) {
            events.push(GameEvent::PlayerHit {
                enemy: idx,
                position: enemy_bounds.center(),
            });
            enemy.respawn(scene, settings, &mut *rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Key;
    use crate::settings::Settings;

    fn new_state() -> GameState {
        GameState::new(Settings::default(), 800.0, 600.0, 12345)
    }

    /// Move every enemy off to the right so it can't interfere
    fn park_enemies(state: &mut GameState) {
        for (i, enemy) in state.enemies.iter_mut().enumerate() {
            enemy.actor_mut().set_position(2000.0 + i as f32 * 100.0, 0.0);
        }
    }

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut state = new_state();
        park_enemies(&mut state);
        let before: Vec<_> = state.enemies.iter().map(|e| e.actor().position()).collect();

        tick(&mut state, 0.0);
        let after: Vec<_> = state.enemies.iter().map(|e| e.actor().position()).collect();

        assert_eq!(state.frame, 1);
        assert_eq!(before, after);
    }

    #[test]
    fn test_enemies_advance_left() {
        let mut state = new_state();
        park_enemies(&mut state);
        state.enemies.iter_mut().next().unwrap().actor_mut().set_position(500.0, 10.0);

        tick(&mut state, 0.0);
        tick(&mut state, 100.0);

        let x = state.enemies.iter().next().unwrap().actor().position().x;
        assert!((x - 470.0).abs() < 0.001);
    }

    #[test]
    fn test_laser_destroys_enemy() {
        let mut state = new_state();
        park_enemies(&mut state);

        let target = state.player.actor().bounds();
        // Enemy directly in front of the dude
        state
            .enemies
            .iter_mut()
            .next()
            .unwrap()
            .actor_mut()
            .set_position(target.right() + 20.0, target.top());

        state.scene.input.press(Key::Space);
        let mut t = 0.0;
        let mut destroyed = false;
        for _ in 0..30 {
            tick(&mut state, t);
            t += 16.0;
            if state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyDestroyed { enemy: 0, .. }))
            {
                destroyed = true;
                break;
            }
        }

        assert!(destroyed);
        // Respawned past the right edge
        let enemy = state.enemies.iter().next().unwrap();
        assert!(enemy.is_alive());
        assert_eq!(enemy.actor().position().x, 800.0 + 60.0);
        assert_eq!(state.active_lasers(), 0);
    }

    #[test]
    fn test_enemy_rams_player() {
        let mut state = new_state();
        park_enemies(&mut state);
        let body = state.player.actor().bounds();
        state
            .enemies
            .iter_mut()
            .nth(2)
            .unwrap()
            .actor_mut()
            .set_position(body.left() + 4.0, body.top() + 4.0);

        tick(&mut state, 0.0);

        let events = state.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::PlayerHit { enemy: 2, .. }]));
        assert!(state.player.is_alive());
        assert_eq!(state.enemies.iter().nth(2).unwrap().actor().position().x, 860.0);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut state = new_state();
        park_enemies(&mut state);
        state.scene.input.press(Key::Space);
        // Cooldown starts at zero and must drop below it before the first shot
        tick(&mut state, 0.0);
        tick(&mut state, 16.0);
        assert!(state.pending_events().is_empty());
        tick(&mut state, 32.0);
        assert!(!state.pending_events().is_empty());
        assert!(!state.drain_events().is_empty());
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_long_pause_freezes_world() {
        let mut state = new_state();
        park_enemies(&mut state);
        state.enemies.iter_mut().next().unwrap().actor_mut().set_position(500.0, 10.0);

        tick(&mut state, 0.0);
        tick(&mut state, 10_000.0);

        let x = state.enemies.iter().next().unwrap().actor().position().x;
        assert_eq!(x, 500.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();

        for s in [&mut a, &mut b] {
            s.scene.input.press(Key::Space);
            s.scene.input.press(Key::Down);
        }

        let mut t = 0.0;
        for _ in 0..600 {
            tick(&mut a, t);
            tick(&mut b, t);
            t += 16.0;
        }

        assert_eq!(a.drain_events(), b.drain_events());
        assert_eq!(a.player.actor().position(), b.player.actor().position());
        let pa: Vec<_> = a.enemies.iter().map(|e| e.actor().position()).collect();
        let pb: Vec<_> = b.enemies.iter().map(|e| e.actor().position()).collect();
        assert_eq!(pa, pb);
    }
}
