//! Input trackers for the descent: frame-coherent accumulators that turn
//! winit wheel, touch, and keyboard events into the scalar deltas the depth
//! controller consumes.
//!
//! Each tracker follows the same pattern: forward events in via `on_*`
//! methods during event collection, query the accumulated values once per
//! frame, then call `clear_transients` at end of frame.

pub mod keys;
pub mod touch;
pub mod wheel;

pub use keys::{KeyTracker, annotations_toggled, jump_request};
pub use touch::{RawTouchEvent, TouchTracker};
pub use wheel::WheelState;
