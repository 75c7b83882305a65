/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use nalgebra::{matrix, Matrix3, Matrix4, Point3, Vector3};

use crate::error::{invalid, Result};

/// Flips camera `y` and `z` axes, OpenGL camera space to OpenCV camera space
const GL_TO_CV: Matrix4<f32> = matrix![1.0, 0.0, 0.0, 0.0;
                                       0.0, -1.0, 0.0, 0.0;
                                       0.0, 0.0, -1.0, 0.0;
                                       0.0, 0.0, 0.0, 1.0];

/// Camera-to-world transform.
///
/// Columns of the rotation block are the right, up and backward axes,
/// translation column is the camera position.
/// `M * camera_space = world_space`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    matrix: Matrix4<f32>,
}

impl Pose {
    /// Build pose from its axes and position
    pub fn from_columns(
        right: Vector3<f32>,
        up: Vector3<f32>,
        backward: Vector3<f32>,
        position: Point3<f32>,
    ) -> Pose {
        let matrix = matrix![right.x, up.x, backward.x, position.x;
                             right.y, up.y, backward.y, position.y;
                             right.z, up.z, backward.z, position.z;
                             0.0, 0.0, 0.0, 1.0];
        Pose { matrix }
    }

    /// Wrap a 4x4 camera-to-world matrix.
    ///
    /// Matrix must be finite, with bottom row `[0,0,0,1]`.
    /// Orthonormality of the rotation block is not checked, see [`Pose::is_orthonormal`].
    pub fn from_matrix(matrix: Matrix4<f32>) -> Result<Pose> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(invalid("pose matrix contains non-finite values"));
        }
        let bottom = matrix.row(3);
        if bottom[0] != 0.0 || bottom[1] != 0.0 || bottom[2] != 0.0 || bottom[3] != 1.0 {
            return Err(invalid(format!(
                "pose bottom row must be [0, 0, 0, 1], got [{}, {}, {}, {}]",
                bottom[0], bottom[1], bottom[2], bottom[3]
            )));
        }
        Ok(Pose { matrix })
    }

    pub(crate) fn from_matrix_unchecked(matrix: Matrix4<f32>) -> Pose {
        Pose { matrix }
    }

    pub fn identity() -> Pose {
        Pose {
            matrix: Matrix4::identity(),
        }
    }

    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.matrix
    }

    /// Top left 3x3 block
    pub fn rotation(&self) -> Matrix3<f32> {
        self.matrix.fixed_slice::<3, 3>(0, 0).into_owned()
    }

    /// Camera position in world coordinates
    pub fn position(&self) -> Point3<f32> {
        Point3::from(self.column(3))
    }

    pub fn right(&self) -> Vector3<f32> {
        self.column(0)
    }

    pub fn up(&self) -> Vector3<f32> {
        self.column(1)
    }

    pub fn backward(&self) -> Vector3<f32> {
        self.column(2)
    }

    fn column(&self, i: usize) -> Vector3<f32> {
        self.matrix.fixed_slice::<3, 1>(0, i).into_owned()
    }

    /// Same pose, with camera `y` and `z` axes flipped (`M * diag(1,-1,-1,1)`).
    ///
    /// Converts OpenGL style camera-to-world into OpenCV style. The conversion is its own inverse.
    pub fn to_opencv(&self) -> Pose {
        Pose {
            matrix: self.matrix * GL_TO_CV,
        }
    }

    /// Inverse transform, world to camera.
    ///
    /// Uses the rigid body inverse `[R^T | -R^T * C]`, rotation block is assumed orthonormal.
    pub fn world_to_camera(&self) -> Matrix4<f32> {
        let r_t = self.rotation().transpose();
        let t = -(r_t * self.position().coords);

        let mut inverse = r_t.to_homogeneous();
        inverse.fixed_slice_mut::<3, 1>(0, 3).copy_from(&t);
        inverse
    }

    /// Check that rotation columns are unit length and mutually perpendicular
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let axes = [self.right(), self.up(), self.backward()];
        let unit = axes
            .iter()
            .all(|a| (a.magnitude() - 1.0).abs() <= tolerance);
        let perpendicular = axes[0].dot(&axes[1]).abs() <= tolerance
            && axes[0].dot(&axes[2]).abs() <= tolerance
            && axes[1].dot(&axes[2]).abs() <= tolerance;
        unit && perpendicular
    }

    /// Rows of the full 4x4 matrix
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        let m = &self.matrix;
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = m[(r, c)];
            }
        }
        rows
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
