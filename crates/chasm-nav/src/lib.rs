//! Depth navigation: the state machine that turns scroll/touch input and
//! per-frame time steps into smooth, bounded, snapping motion along the
//! descent axis.

pub mod controller;

pub use controller::{
    ARRIVAL_EPS, CAPTURE_RADIUS, DepthController, FRICTION, MAX_DT, MAX_SPEED, NavPhase, SEEK_GAIN,
    UNANCHOR_DEADBAND,
};
