//! Camera rig for the descent corridor.
//!
//! The rig is a pure reader: the depth controller exclusively owns the
//! depth coordinate, and the rig maps it to a view transform each frame.
//! The eye sits a fixed distance back from the corridor axis and slides
//! vertically with the viewpoint.

use glam::{Mat4, Vec3};

/// Maps controller depth to camera transforms.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    /// Pull-back distance from the corridor axis.
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: 20.0,
            fov_y: 65.0_f32.to_radians(),
            near: 0.1,
            far: 400.0,
        }
    }
}

impl CameraRig {
    /// Eye position at the given depth.
    #[must_use]
    pub fn eye(&self, depth: f32) -> Vec3 {
        Vec3::new(0.0, depth, self.distance)
    }

    /// Right-handed view matrix looking into the corridor at the given
    /// depth.
    #[must_use]
    pub fn view_matrix(&self, depth: f32) -> Mat4 {
        Mat4::look_at_rh(self.eye(depth), Vec3::new(0.0, depth, 0.0), Vec3::Y)
    }

    /// Right-handed perspective projection for the given aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }
}
