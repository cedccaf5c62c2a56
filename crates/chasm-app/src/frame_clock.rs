//! Variable-timestep frame clock.
//!
//! The depth controller integrates with whatever delta the render loop
//! produces, so the clock just measures wall-clock time between frames and
//! clamps long gaps (backgrounded window, debugger pause) to keep a single
//! tick from producing an out-of-bounds jump.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time handed to the controller, in seconds. Matches the
/// controller's own per-tick clamp.
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Measures per-frame elapsed time.
pub struct FrameClock {
    previous: Instant,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a clock starting from the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
            frame_count: 0,
        }
    }

    /// Returns the clamped seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        self.frame_count += 1;
        clamp_frame_time(raw)
    }

    /// Total number of frames ticked.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Deterministic clock for tests: hands back scripted frame times instead
/// of wall-clock deltas, run through the same clamp as [`FrameClock`].
#[derive(Debug, Clone)]
pub struct ManualClock {
    step: f32,
    frame_count: u64,
}

impl ManualClock {
    /// Creates a clock that reports `step` seconds on every tick.
    #[must_use]
    pub fn fixed(step: f32) -> Self {
        Self {
            step,
            frame_count: 0,
        }
    }

    /// Changes the frame time reported by subsequent ticks.
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Returns the scripted frame time, clamped like the wall clock.
    pub fn tick(&mut self) -> f32 {
        self.frame_count += 1;
        clamp_frame_time(self.step)
    }

    /// Total number of frames ticked.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Clamps a raw frame time to [`MAX_FRAME_TIME`].
#[must_use]
pub fn clamp_frame_time(raw: f32) -> f32 {
    if raw > MAX_FRAME_TIME {
        warn!(
            "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
            raw * 1000.0,
            MAX_FRAME_TIME * 1000.0
        );
        MAX_FRAME_TIME
    } else {
        raw
    }
}
