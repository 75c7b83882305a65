/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

//! Fixed elevation orbit around the origin, used as a render path.
//!
//! Poses follow the OpenGL convention, like generated paths: the camera
//! looks down `-backward`, at the origin.

use log::debug;
use nalgebra::{matrix, Matrix4};

use crate::{
    camera::{CameraPath, Pose},
    error::{invalid, Result},
};

/// Swaps world axes of the orbit so that the `z` axis is up
const AXES_SWAP: Matrix4<f32> = matrix![-1.0, 0.0, 0.0, 0.0;
                                        0.0, 0.0, 1.0, 0.0;
                                        0.0, 1.0, 0.0, 0.0;
                                        0.0, 0.0, 0.0, 1.0];

fn translate_z(t: f32) -> Matrix4<f32> {
    matrix![1.0, 0.0, 0.0, 0.0;
            0.0, 1.0, 0.0, 0.0;
            0.0, 0.0, 1.0, t;
            0.0, 0.0, 0.0, 1.0]
}

fn rotate_phi(phi: f32) -> Matrix4<f32> {
    let (s, c) = phi.sin_cos();
    matrix![1.0, 0.0, 0.0, 0.0;
            0.0, c, -s, 0.0;
            0.0, s, c, 0.0;
            0.0, 0.0, 0.0, 1.0]
}

fn rotate_theta(theta: f32) -> Matrix4<f32> {
    let (s, c) = theta.sin_cos();
    matrix![c, 0.0, -s, 0.0;
            0.0, 1.0, 0.0, 0.0;
            s, 0.0, c, 0.0;
            0.0, 0.0, 0.0, 1.0]
}

/// Pose on an orbit, angles in degrees.
///
/// # Params
/// * `theta_deg` - azimuth around the vertical axis
/// * `phi_deg` - elevation, camera sits `radius * sin(phi)` below the horizontal plane
/// * `radius` - distance from the origin
pub fn spherical_pose(theta_deg: f32, phi_deg: f32, radius: f32) -> Pose {
    let matrix = AXES_SWAP
        * rotate_theta(theta_deg.to_radians())
        * rotate_phi(phi_deg.to_radians())
        * translate_z(radius);
    // Product of rigid transforms, bottom row stays [0,0,0,1]
    Pose::from_matrix_unchecked(matrix)
}

/// Settings of [`render_path`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    /// Number of poses
    pub views: usize,
    /// Elevation in degrees
    pub elevation_deg: f32,
    /// Distance from the origin
    pub radius: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        OrbitConfig {
            views: 40,
            elevation_deg: 25.0,
            radius: 1.0,
        }
    }
}

/// Full circle of `views` poses, azimuths evenly spaced from -180 degrees (inclusive)
/// to 180 degrees (exclusive).
pub fn render_path(config: &OrbitConfig) -> Result<CameraPath> {
    if config.views == 0 {
        return Err(invalid("orbit needs at least one view"));
    }
    if !config.radius.is_finite() || config.radius == 0.0 {
        return Err(invalid(format!(
            "orbit radius must be finite and non-zero, got {}",
            config.radius
        )));
    }
    if !config.elevation_deg.is_finite() {
        return Err(invalid("orbit elevation must be finite"));
    }

    let poses: Vec<Pose> = (0..config.views)
        .map(|i| {
            let azimuth = -180.0 + 360.0 * i as f32 / config.views as f32;
            spherical_pose(azimuth, config.elevation_deg, config.radius)
        })
        .collect();

    debug!(
        "Generated orbit: {} views, elevation {} deg, radius {}",
        poses.len(),
        config.elevation_deg,
        config.radius
    );

    Ok(CameraPath::new(poses))
}
