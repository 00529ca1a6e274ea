//! Laser Dude - a small side-scrolling shooter
//!
//! Core modules:
//! - `math`: Rect/Circle geometry over `glam::Vec2`
//! - `engine`: Input, sprites, frame timer and the scene
//! - `sim`: Actors, object pools and the per-frame update
//! - `renderer`: WebGPU sprite pipeline
//! - `settings`: Tunables persisted as JSON

pub mod engine;
pub mod error;
pub mod math;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Frame gaps longer than this (ms) count as zero time
    pub const MAX_FRAME_GAP_MS: f64 = 1000.0;

    /// Sprite sizes in pixels
    pub const DUDE_SIZE: Vec2 = Vec2::new(64.0, 64.0);
    pub const ENEMY_SIZE: Vec2 = Vec2::new(48.0, 48.0);
    pub const LASER_SIZE: Vec2 = Vec2::new(32.0, 8.0);

    /// Where idle lasers wait, far outside any canvas
    pub const PARK_POSITION: Vec2 = Vec2::new(9000.0, 9000.0);
}
