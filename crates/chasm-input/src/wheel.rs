//! Frame-coherent scroll-wheel accumulator.
//!
//! Winit reports wheel motion either in lines or in pixels depending on the
//! device; both are normalized to a single pixel-equivalent delta with the
//! descent sign convention: positive = scroll down = descend.

use winit::event::MouseScrollDelta;

/// Approximate pixels per line for normalizing `LineDelta` events.
const PIXELS_PER_LINE: f32 = 40.0;

/// Accumulates wheel events during a frame into one raw delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelState {
    raw_delta: f32,
}

impl WheelState {
    /// Creates an empty wheel state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `MouseWheel` event.
    ///
    /// Winit's Y axis is positive for scroll-up; the descent convention is
    /// the opposite, so the sign flips here.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => {
                self.raw_delta += -y * PIXELS_PER_LINE;
            }
            MouseScrollDelta::PixelDelta(pos) => {
                self.raw_delta += -pos.y as f32;
            }
        }
    }

    /// Pixel-equivalent delta accumulated this frame, positive = descend.
    #[must_use]
    pub fn raw_delta(&self) -> f32 {
        self.raw_delta
    }

    /// Clears the accumulated delta. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.raw_delta = 0.0;
    }
}
