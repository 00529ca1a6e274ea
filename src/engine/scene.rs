//! The playfield actors move in
//!
//! Holds the canvas dimensions and the current input state. Drawing is done
//! by the renderer from the game's draw list.

use super::input::{InputState, Key};
use crate::math::Rect;

#[derive(Debug, Clone)]
pub struct Scene {
    width: f32,
    height: f32,
    bounds: Rect,
    pub input: InputState,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            bounds: Rect::new(0.0, 0.0, width, height),
            input: InputState::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Canvas was resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.bounds = Rect::new(0.0, 0.0, width, height);
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    pub fn mouse_x(&self) -> f32 {
        self.input.mouse_x()
    }

    pub fn mouse_y(&self) -> f32 {
        self.input.mouse_y()
    }

    pub fn is_mouse_down(&self) -> bool {
        self.input.is_mouse_down()
    }
}
