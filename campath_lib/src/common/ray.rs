/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use nalgebra::{Point3, Vector3};

use super::{NearFar, SceneBounds};

/// Ray cast by camera, in world coordinates.
/// Main usecase is sampling points along the ray for volumetric rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    /// `direction` should be unit vector, rays from the caster always are.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
        Ray { origin, direction }
    }

    /// Returns point `t` units far from ray origin in ray direction
    pub fn point_from_t(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction
    }

    /// `n` evenly spaced points between `near` and `far`
    pub fn sample_points(&self, near_far: &NearFar, n: usize) -> Vec<Point3<f32>> {
        near_far
            .steps(n)
            .into_iter()
            .map(|t| self.point_from_t(t))
            .collect()
    }

    /// Transform ray from world coordinates into normalized scene coordinates.
    ///
    /// Origin is normalized by [`SceneBounds::normalize`], direction is scaled by the same
    /// per axis factor, so `t` keeps its meaning. Direction is no longer unit length.
    pub fn to_scene_space(&self, bounds: &SceneBounds) -> Ray {
        let origin = bounds.normalize(&self.origin);
        let direction = self.direction.component_div(&bounds.radius());
        Ray { origin, direction }
    }

    /// `[ox, oy, oz, dx, dy, dz]`
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.direction.x,
            self.direction.y,
            self.direction.z,
        ]
    }
}
