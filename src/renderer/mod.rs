//! WebGPU rendering module
//!
//! Draws the game's sprite list as vertex-colored quads.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, pixel_to_ndc};
pub use vertex::Vertex;
