//! Keyboard and mouse state
//!
//! Filled in by the browser event handlers, read by actors once per frame.

use serde::{Deserialize, Serialize};

/// Number of key codes tracked
pub const KEY_TABLE_SIZE: usize = 256;

/// Keys the game reacts to, valued by their DOM key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Key {
    Left = 37,
    Right = 39,
    Up = 38,
    Down = 40,
    Space = 32,
}

impl Key {
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            39 => Some(Key::Right),
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            32 => Some(Key::Space),
            _ => None,
        }
    }
}

/// Held keys and last known mouse state
#[derive(Debug, Clone)]
pub struct InputState {
    keys: [bool; KEY_TABLE_SIZE],
    mouse_x: f32,
    mouse_y: f32,
    mouse_down: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: [false; KEY_TABLE_SIZE],
            mouse_x: 0.0,
            mouse_y: 0.0,
            mouse_down: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Codes past the table are ignored.
    pub fn set_key(&mut self, code: u32, down: bool) {
        if let Some(slot) = self.keys.get_mut(code as usize) {
            *slot = down;
        }
    }

    pub fn press(&mut self, key: Key) {
        self.set_key(key.code(), true);
    }

    pub fn release(&mut self, key: Key) {
        self.set_key(key.code(), false);
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.is_code_down(key.code())
    }

    pub fn is_code_down(&self, code: u32) -> bool {
        self.keys.get(code as usize).copied().unwrap_or(false)
    }

    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    pub fn set_mouse_button(&mut self, down: bool) {
        self.mouse_down = down;
    }

    pub fn mouse_x(&self) -> f32 {
        self.mouse_x
    }

    pub fn mouse_y(&self) -> f32 {
        self.mouse_y
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Release every key and the mouse button (focus lost)
    pub fn clear(&mut self) {
        self.keys = [false; KEY_TABLE_SIZE];
        self.mouse_down = false;
    }
}
