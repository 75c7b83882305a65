/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use nalgebra::{Matrix3x4, Point3};

use super::{projection_matrix, Intrinsics, Pose};

/// Time ordered sequence of camera poses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CameraPath {
    poses: Vec<Pose>,
}

impl CameraPath {
    pub fn new(poses: Vec<Pose>) -> CameraPath {
        CameraPath { poses }
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn get(&self, frame: usize) -> Option<&Pose> {
        self.poses.get(frame)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.poses.iter()
    }

    /// Camera positions, in frame order
    pub fn positions(&self) -> Vec<Point3<f32>> {
        self.poses.iter().map(Pose::position).collect()
    }

    /// Keep every `len / n_vis`-th pose.
    ///
    /// With `None`, or when the interval would be zero, the whole path is kept.
    pub fn subsample(&self, n_vis: Option<usize>) -> CameraPath {
        let interval = match n_vis {
            Some(n) if n > 0 => self.poses.len() / n,
            _ => 1,
        };
        let interval = interval.max(1);
        let poses = self.poses.iter().step_by(interval).copied().collect();
        CameraPath { poses }
    }

    /// Same path in the OpenCV axis convention, see [`Pose::to_opencv`]
    pub fn to_opencv(&self) -> CameraPath {
        let poses = self.poses.iter().map(Pose::to_opencv).collect();
        CameraPath { poses }
    }

    /// World to pixel projection matrix of every frame
    pub fn projection_matrices(&self, intrinsics: &Intrinsics) -> Vec<Matrix3x4<f32>> {
        self.poses
            .iter()
            .map(|pose| projection_matrix(intrinsics, pose))
            .collect()
    }

    pub fn into_poses(self) -> Vec<Pose> {
        self.poses
    }
}

impl From<Vec<Pose>> for CameraPath {
    fn from(poses: Vec<Pose>) -> Self {
        CameraPath::new(poses)
    }
}

impl<'a> IntoIterator for &'a CameraPath {
    type Item = &'a Pose;

    type IntoIter = std::slice::Iter<'a, Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}
