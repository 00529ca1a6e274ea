//! Sprite geometry
//!
//! Every sprite is a flat quad in its kind's color with a small inset detail
//! so the dude and enemies read at a glance. Coordinates stay in canvas
//! pixels; the pipeline maps them to clip space.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::engine::{Sprite, SpriteKind};

/// Two triangles covering `min..max`
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Append the vertices for one sprite
pub fn sprite(out: &mut Vec<Vertex>, sprite: &Sprite) {
    let min = sprite.position();
    let extent = sprite.draw_size();
    let max = min + extent;

    match sprite.kind {
        SpriteKind::Dude => {
            out.extend_from_slice(&quad(min, max, colors::DUDE));
            // Visor on the right, facing the enemies
            let visor_min = min + extent * Vec2::new(0.6, 0.2);
            let visor_max = min + extent * Vec2::new(0.9, 0.4);
            out.extend_from_slice(&quad(visor_min, visor_max, colors::DUDE_VISOR));
        }
        SpriteKind::Enemy => {
            out.extend_from_slice(&quad(min, max, colors::ENEMY));
            let core_min = min + extent * 0.3;
            let core_max = min + extent * 0.7;
            out.extend_from_slice(&quad(core_min, core_max, colors::ENEMY_CORE));
        }
        SpriteKind::Laser => {
            out.extend_from_slice(&quad(min, max, colors::LASER));
        }
    }
}

/// Vertices for a whole draw list, in order
pub fn scene<'a>(sprites: impl IntoIterator<Item = &'a Sprite>) -> Vec<Vertex> {
    let mut out = Vec::new();
    for s in sprites {
        sprite(&mut out, s);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_covers_corners() {
        let q = quad(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), colors::LASER);
        let xs: Vec<f32> = q.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = q.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 3.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 4.0);
    }

    #[test]
    fn test_vertex_counts_per_kind() {
        let dude = Sprite::new(SpriteKind::Dude);
        let enemy = Sprite::new(SpriteKind::Enemy);
        let laser = Sprite::new(SpriteKind::Laser);

        assert_eq!(scene([&dude]).len(), 12);
        assert_eq!(scene([&enemy]).len(), 12);
        assert_eq!(scene([&laser]).len(), 6);
        assert_eq!(scene([&dude, &enemy, &laser]).len(), 30);
    }

    #[test]
    fn test_scale_applies_to_extent() {
        let mut laser = Sprite::new(SpriteKind::Laser);
        laser.set_position(10.0, 10.0);
        laser.set_scale(2.0);
        let verts = scene([&laser]);
        let max_x = verts.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 10.0 + laser.width() * 2.0);
    }
}
