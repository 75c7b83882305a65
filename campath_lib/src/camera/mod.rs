/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use nalgebra::Matrix3x4;

mod intrinsics;
mod path;
mod pose;

pub use intrinsics::Intrinsics;
pub use path::CameraPath;
pub use pose::Pose;

/// Orientation of camera space axes relative to the pose's rotation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisConvention {
    /// Camera looks down `+z`, `y` points down the image.
    /// Rotation block is applied to camera space directions as-is.
    OpenCv,
    /// Camera looks down `-z` (the `-backward` column), `y` points up.
    /// Generated paths use this one.
    OpenGl,
}

impl Default for AxisConvention {
    fn default() -> Self {
        AxisConvention::OpenCv
    }
}

/// World to pixel projection matrix `K * (pose^-1)[0..3]`.
///
/// Pose is taken in the OpenCV convention, as given.
pub fn projection_matrix(intrinsics: &Intrinsics, pose: &Pose) -> Matrix3x4<f32> {
    let world_to_camera = pose.world_to_camera();
    intrinsics.matrix() * world_to_camera.fixed_slice::<3, 4>(0, 0)
}
