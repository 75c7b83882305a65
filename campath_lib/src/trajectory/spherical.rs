/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use nalgebra::{vector, Point3, Vector3};

use crate::camera::Pose;

/// Camera placed on a sphere around the world origin.
///
/// Axes are the unit radial and tangent vectors of the spherical coordinate system.
/// They are orthonormal for any `theta`, `phi`, including the poles.
/// The frame is left-handed: `right x up = -backward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalFrame {
    /// Camera position in world coordinates
    pub position: Point3<f32>,
    /// Side vector, `d/dphi` of the position, normalized
    pub right: Vector3<f32>,
    /// Up vector, `d/dtheta` of the position, normalized
    pub up: Vector3<f32>,
    /// Radial direction, away from the origin. Camera looks down `-backward`.
    pub backward: Vector3<f32>,
}

impl SphericalFrame {
    /// Build the frame for radius `r`, polar angle `theta` and azimuth `phi` (radians)
    pub fn from_spherical(r: f32, theta: f32, phi: f32) -> SphericalFrame {
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();

        let backward = vector![sin_t * cos_p, sin_t * sin_p, cos_t];
        let up = vector![cos_t * cos_p, cos_t * sin_p, -sin_t];
        let right = vector![-sin_p, cos_p, 0.0];

        SphericalFrame {
            position: Point3::from(r * backward),
            right,
            up,
            backward,
        }
    }

    /// Camera-to-world matrix with columns `[right, up, backward, position]`
    pub fn to_pose(&self) -> Pose {
        Pose::from_columns(self.right, self.up, self.backward, self.position)
    }
}

/// Spherical coordinates of `position` relative to the origin.
///
/// Returns `(r, theta, phi)`
pub fn to_spherical(position: &Point3<f32>) -> (f32, f32, f32) {
    let r = position.coords.magnitude();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let theta = (position.z / r).clamp(-1.0, 1.0).acos();
    let phi = position.y.atan2(position.x);

    (r, theta, phi)
}

#[cfg(test)]
mod test {

    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::test_helpers::{compare_float, compare_vec};

    fn assert_orthonormal(frame: &SphericalFrame) {
        compare_float(frame.right.magnitude(), 1.0, 1e-6);
        compare_float(frame.up.magnitude(), 1.0, 1e-6);
        compare_float(frame.backward.magnitude(), 1.0, 1e-6);

        compare_float(frame.right.dot(&frame.up), 0.0, 1e-6);
        compare_float(frame.right.dot(&frame.backward), 0.0, 1e-6);
        compare_float(frame.up.dot(&frame.backward), 0.0, 1e-6);
    }

    #[test]
    fn equator_frame() {
        let frame = SphericalFrame::from_spherical(2.0, FRAC_PI_2, 0.0);

        compare_vec(&frame.position.coords, &vector![2.0, 0.0, 0.0], 1e-6);
        compare_vec(&frame.backward, &vector![1.0, 0.0, 0.0], 1e-6);
        compare_vec(&frame.up, &vector![0.0, 0.0, -1.0], 1e-6);
        compare_vec(&frame.right, &vector![0.0, 1.0, 0.0], 1e-6);
        assert_orthonormal(&frame);
    }

    #[test]
    fn left_handed_frame() {
        // right x up points at the origin, the rotation block is a reflection
        let frame = SphericalFrame::from_spherical(1.0, 1.1, -0.4);
        compare_vec(&frame.right.cross(&frame.up), &(-frame.backward), 1e-6);
        compare_float(frame.to_pose().rotation().determinant(), -1.0, 1e-5);
    }

    #[test]
    fn orthonormal_everywhere() {
        for i in 0..=16 {
            for j in 0..16 {
                let theta = PI * i as f32 / 16.0;
                let phi = 2.0 * PI * j as f32 / 16.0;
                let frame = SphericalFrame::from_spherical(3.0, theta, phi);
                assert_orthonormal(&frame);
            }
        }
    }

    #[test]
    fn position_along_backward() {
        let frame = SphericalFrame::from_spherical(5.0, 0.7, 2.1);
        compare_vec(&frame.position.coords, &(5.0 * frame.backward), 1e-5);
    }

    #[test]
    fn spherical_round_trip() {
        let frame = SphericalFrame::from_spherical(2.5, 0.9, -1.3);
        let (r, theta, phi) = to_spherical(&frame.position);
        compare_float(r, 2.5, 1e-5);
        compare_float(theta, 0.9, 1e-5);
        compare_float(phi, -1.3, 1e-5);
    }

    #[test]
    fn pose_columns() {
        let frame = SphericalFrame::from_spherical(2.0, FRAC_PI_2, FRAC_PI_2);
        let pose = frame.to_pose();

        assert_eq!(pose.right(), frame.right);
        assert_eq!(pose.up(), frame.up);
        assert_eq!(pose.backward(), frame.backward);
        assert_eq!(pose.position(), frame.position);
    }
}
