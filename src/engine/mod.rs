//! Engine layer: input, sprites, frame timing and the scene
//!
//! Knows nothing about the game's actors. The browser glue in `main.rs`
//! writes into it and the simulation reads from it.

pub mod input;
pub mod scene;
pub mod sprite;
pub mod timer;

pub use input::{InputState, Key};
pub use scene::Scene;
pub use sprite::{Sprite, SpriteKind};
pub use timer::Timer;
