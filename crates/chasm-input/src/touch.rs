//! Single-finger drag tracker for touch navigation.
//!
//! Follows the first touch that lands and ignores the rest. The drag delta
//! is derived from consecutive vertical position samples as
//! `previous - current`, so an upward swipe yields a positive delta
//! (descend), matching the wheel convention.

use winit::event::{Touch, TouchPhase};

/// Minimal description of a touch sample for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawTouchEvent {
    /// Platform touch identifier, stable for the duration of the gesture.
    pub id: u64,
    /// Phase of the gesture.
    pub phase: TouchPhase,
    /// Vertical position in window coordinates.
    pub y: f32,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    id: u64,
    last_y: f32,
}

/// Frame-coherent touch drag state.
///
/// # Usage
///
/// 1. Forward every winit [`Touch`] to [`on_touch`](Self::on_touch).
/// 2. Query [`drag_delta`](Self::drag_delta) and the began/released edges.
/// 3. Call [`clear_transients`](Self::clear_transients) at end of frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    active: Option<ActiveTouch>,
    drag_delta: f32,
    began: bool,
    released: bool,
}

impl TouchTracker {
    /// Creates a tracker with no active touch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit [`Touch`] event.
    pub fn on_touch(&mut self, touch: &Touch) {
        self.on_raw(RawTouchEvent {
            id: touch.id,
            phase: touch.phase,
            y: touch.location.y as f32,
        });
    }

    /// Process a [`RawTouchEvent`] (platform-independent, test-friendly).
    pub fn on_raw(&mut self, event: RawTouchEvent) {
        match event.phase {
            TouchPhase::Started => {
                if self.active.is_none() {
                    self.active = Some(ActiveTouch {
                        id: event.id,
                        last_y: event.y,
                    });
                    self.began = true;
                }
            }
            TouchPhase::Moved => {
                if let Some(active) = &mut self.active
                    && active.id == event.id
                {
                    self.drag_delta += active.last_y - event.y;
                    active.last_y = event.y;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active.is_some_and(|a| a.id == event.id) {
                    self.active = None;
                    self.released = true;
                }
            }
        }
    }

    /// Vertical drag delta accumulated this frame, positive = descend.
    #[must_use]
    pub fn drag_delta(&self) -> f32 {
        self.drag_delta
    }

    /// Whether a drag started this frame.
    #[must_use]
    pub fn drag_began(&self) -> bool {
        self.began
    }

    /// Whether the tracked drag ended this frame (momentum hook).
    #[must_use]
    pub fn drag_released(&self) -> bool {
        self.released
    }

    /// Whether a finger is currently down.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Clears per-frame transients: delta and the began/released edges.
    pub fn clear_transients(&mut self) {
        self.drag_delta = 0.0;
        self.began = false;
        self.released = false;
    }
}
