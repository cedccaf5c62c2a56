//! Chasm viewer application framework.
//!
//! Provides the frame clock, the camera rig that follows the depth
//! controller, the HUD readout, and the winit event-loop wiring.

pub mod camera;
pub mod frame_clock;
pub mod hud;
pub mod window;
