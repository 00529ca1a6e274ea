//! Frame timer
//!
//! Fed the `requestAnimationFrame` timestamp (milliseconds) and exposes the
//! elapsed time since the previous frame in seconds.

use crate::consts::MAX_FRAME_GAP_MS;

#[derive(Debug, Clone, Default)]
pub struct Timer {
    current: f64,
    last: f64,
    delta: f32,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the latest frame (ms)
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Timestamp of the frame before that (ms)
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Seconds elapsed between the last two frames
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Advance to `timestamp` (ms).
    ///
    /// Gaps over [`MAX_FRAME_GAP_MS`] (suspended tab) and backwards jumps
    /// yield a zero delta.
    pub fn update(&mut self, timestamp: f64) {
        let mut delta = timestamp - self.current;
        self.last = self.current;
        self.current = timestamp;
        if !(0.0..=MAX_FRAME_GAP_MS).contains(&delta) {
            delta = 0.0;
        }
        self.delta = (delta * 0.001) as f32;
    }
}
