/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use nalgebra::{matrix, vector, Matrix3, Vector3};

use crate::error::{invalid, Result};

/// Pinhole camera parameters, shared by all frames of a path.
///
/// All values are in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intrinsics {
    focal_x: f32,
    focal_y: f32,
    principal_x: f32,
    principal_y: f32,
    width: usize,
    height: usize,
}

impl Intrinsics {
    /// Construct new intrinsics.
    ///
    /// Focal lengths must be finite and non-zero, resolution must be non-zero.
    pub fn new(
        focal_x: f32,
        focal_y: f32,
        principal_x: f32,
        principal_y: f32,
        width: usize,
        height: usize,
    ) -> Result<Intrinsics> {
        if !focal_x.is_finite() || !focal_y.is_finite() || focal_x == 0.0 || focal_y == 0.0 {
            return Err(invalid(format!(
                "focal lengths must be finite and non-zero, got ({focal_x}, {focal_y})"
            )));
        }
        if !principal_x.is_finite() || !principal_y.is_finite() {
            return Err(invalid("principal point must be finite"));
        }
        if width == 0 || height == 0 {
            return Err(invalid(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Intrinsics {
            focal_x,
            focal_y,
            principal_x,
            principal_y,
            width,
            height,
        })
    }

    /// Principal point in the middle of the image
    pub fn centered(focal_x: f32, focal_y: f32, width: usize, height: usize) -> Result<Intrinsics> {
        Intrinsics::new(
            focal_x,
            focal_y,
            0.5 * width as f32,
            0.5 * height as f32,
            width,
            height,
        )
    }

    /// Derive square-pixel intrinsics from horizontal field of view in radians.
    ///
    /// `focal = 0.5 * width / tan(0.5 * fov_x)`
    pub fn from_fov(fov_x: f32, width: usize, height: usize) -> Result<Intrinsics> {
        if !(fov_x > 0.0 && fov_x < std::f32::consts::PI) {
            return Err(invalid(format!(
                "field of view must be in (0, pi), got {fov_x}"
            )));
        }
        let focal = 0.5 * width as f32 / f32::tan(0.5 * fov_x);
        Intrinsics::centered(focal, focal, width, height)
    }

    /// Read intrinsics from the 3x3 matrix `K`.
    ///
    /// Only focal lengths and principal point are used, skew is ignored.
    pub fn from_matrix(k: &Matrix3<f32>, width: usize, height: usize) -> Result<Intrinsics> {
        Intrinsics::new(k[(0, 0)], k[(1, 1)], k[(0, 2)], k[(1, 2)], width, height)
    }

    /// The 3x3 matrix `K`
    pub fn matrix(&self) -> Matrix3<f32> {
        matrix![self.focal_x, 0.0, self.principal_x;
                0.0, self.focal_y, self.principal_y;
                0.0, 0.0, 1.0]
    }

    /// Scale image down by `factor`.
    ///
    /// Resolution is truncated to whole pixels, focal lengths and principal point
    /// are divided by `factor`.
    pub fn downsample(&self, factor: f32) -> Result<Intrinsics> {
        if !(factor > 0.0) || !factor.is_finite() {
            return Err(invalid(format!(
                "downsample factor must be positive, got {factor}"
            )));
        }
        let width = (self.width as f32 / factor) as usize;
        let height = (self.height as f32 / factor) as usize;
        Intrinsics::new(
            self.focal_x / factor,
            self.focal_y / factor,
            self.principal_x / factor,
            self.principal_y / factor,
            width,
            height,
        )
    }

    /// Camera space direction through pixel `(px, py)`, not normalized.
    ///
    /// `((px - cx) / fx, (py - cy) / fy, 1)`
    pub fn pixel_direction(&self, px: usize, py: usize) -> Vector3<f32> {
        vector![
            (px as f32 - self.principal_x) / self.focal_x,
            (py as f32 - self.principal_y) / self.focal_y,
            1.0
        ]
    }

    /// Directions through all pixels, row by row (index `py * width + px`)
    pub fn pixel_directions(&self) -> Vec<Vector3<f32>> {
        let mut directions = Vec::with_capacity(self.pixel_count());
        for py in 0..self.height {
            for px in 0..self.width {
                directions.push(self.pixel_direction(px, py));
            }
        }
        directions
    }

    pub fn focal_x(&self) -> f32 {
        self.focal_x
    }

    pub fn focal_y(&self) -> f32 {
        self.focal_y
    }

    pub fn principal_x(&self) -> f32 {
        self.principal_x
    }

    pub fn principal_y(&self) -> f32 {
        self.principal_y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
