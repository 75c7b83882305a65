/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use log::warn;
use nalgebra::{point, Point3, Vector3};

use super::Ray;
use crate::error::{invalid, Result};

/// Axis aligned box of the scene, in world coordinates.
///
/// Defines the normalized scene space: box center maps to the origin,
/// box faces map to `-1` and `1` on their axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    lower: Point3<f32>,
    upper: Point3<f32>,
}

impl SceneBounds {
    /// Construct new box. `upper` must be strictly greater than `lower` on every axis.
    pub fn new(lower: Point3<f32>, upper: Point3<f32>) -> Result<SceneBounds> {
        if lower.iter().chain(upper.iter()).any(|v| !v.is_finite()) {
            return Err(invalid("scene bounds must be finite"));
        }
        if (0..3).any(|i| upper[i] <= lower[i]) {
            return Err(invalid(format!(
                "scene bounds have zero extent: lower {lower}, upper {upper}"
            )));
        }
        Ok(SceneBounds { lower, upper })
    }

    /// Cube `[-half, half]^3`
    pub fn cube(half: f32) -> Result<SceneBounds> {
        SceneBounds::new(point![-half, -half, -half], point![half, half, half])
    }

    pub fn lower(&self) -> Point3<f32> {
        self.lower
    }

    pub fn upper(&self) -> Point3<f32> {
        self.upper
    }

    pub fn dims(&self) -> Vector3<f32> {
        self.upper - self.lower
    }

    /// Mean of the corners
    pub fn center(&self) -> Point3<f32> {
        self.lower + 0.5 * (self.upper - self.lower)
    }

    /// Half extent on every axis, `upper - center`
    pub fn radius(&self) -> Vector3<f32> {
        self.upper - self.center()
    }

    /// Map world point into normalized scene space, `(point - center) / radius`
    pub fn normalize(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::from((point - self.center()).component_div(&self.radius()))
    }

    /// Normalize every point of the slice
    pub fn normalize_points(&self, points: &[Point3<f32>]) -> Vec<Point3<f32>> {
        let center = self.center();
        let radius = self.radius();
        let normalized: Vec<Point3<f32>> = points
            .iter()
            .map(|p| Point3::from((p - center).component_div(&radius)))
            .collect();
        if normalized.iter().any(|p| p.iter().any(|v| !v.is_finite())) {
            warn!("Normalized points contain non-finite values");
        }
        normalized
    }

    /// Inverse of [`SceneBounds::normalize`]
    pub fn denormalize(&self, point: &Point3<f32>) -> Point3<f32> {
        self.center() + point.coords.component_mul(&self.radius())
    }

    pub fn is_in(&self, pos: &Point3<f32>) -> bool {
        self.upper.x > pos.x
            && self.upper.y > pos.y
            && self.upper.z > pos.z
            && pos.x > self.lower.x
            && pos.y > self.lower.y
            && pos.z > self.lower.z
    }

    /// Segment of the ray inside the box, as `(t_min, t_max)`
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        // Source: An Efficient and Robust Ray–Box Intersection Algorithm. Amy Williams et al. 2004.
        // http://citeseerx.ist.psu.edu/viewdoc/summary?doi=10.1.1.64.7663

        // t value of intersection with the 6 planes of a bounding box
        let t0 = (self.lower - ray.origin).component_div(&ray.direction);
        let t1 = (self.upper - ray.origin).component_div(&ray.direction);

        // [ (min,max) , (min,max) , (min,max) ]
        let t_minmax = t0.zip_map(&t1, |t0, t1| if t0 < t1 { (t0, t1) } else { (t1, t0) });

        let tmin = f32::max(f32::max(t_minmax.x.0, t_minmax.y.0), t_minmax.z.0);
        let tmax = f32::min(f32::min(t_minmax.x.1, t_minmax.y.1), t_minmax.z.1);

        // if tmax < 0, ray is intersecting AABB, but the whole AABB is behind us
        if tmax.is_sign_negative() {
            return None;
        }

        // if tmin > tmax, ray doesn't intersect AABB
        if tmin > tmax {
            return None;
        }

        Some((tmin, tmax))
    }
}

/// Box `[-1.5, 1.5]^3`
impl Default for SceneBounds {
    fn default() -> Self {
        SceneBounds {
            lower: point![-1.5, -1.5, -1.5],
            upper: point![1.5, 1.5, 1.5],
        }
    }
}

#[cfg(test)]
mod test {

    use nalgebra::vector;

    use super::*;
    use crate::test_helpers::compare_vec;

    #[test]
    fn validation() {
        assert!(SceneBounds::new(point![0.0, 0.0, 0.0], point![1.0, 0.0, 1.0]).is_err());
        assert!(SceneBounds::new(point![0.0, 0.0, 0.0], point![-1.0, 1.0, 1.0]).is_err());
        assert!(SceneBounds::new(point![0.0, f32::NAN, 0.0], point![1.0, 1.0, 1.0]).is_err());
        assert!(SceneBounds::new(point![0.0, 0.0, 0.0], point![1.0, 1.0, 1.0]).is_ok());
    }

    #[test]
    fn center_radius() {
        let bounds =
            SceneBounds::new(point![-1.5, -1.5, -1.5], point![1.0, 1.0, -0.25]).unwrap();
        assert_eq!(bounds.center(), point![-0.25, -0.25, -0.875]);
        assert_eq!(bounds.radius(), vector![1.25, 1.25, 0.625]);
    }

    #[test]
    fn normalize_corners() {
        let bounds = SceneBounds::new(point![0.0, 2.0, -4.0], point![2.0, 6.0, 4.0]).unwrap();

        assert_eq!(bounds.normalize(&bounds.lower()), point![-1.0, -1.0, -1.0]);
        assert_eq!(bounds.normalize(&bounds.upper()), point![1.0, 1.0, 1.0]);
        assert_eq!(bounds.normalize(&bounds.center()), point![0.0, 0.0, 0.0]);

        let p = point![0.5, 3.0, 1.0];
        compare_vec(&bounds.denormalize(&bounds.normalize(&p)).coords, &p.coords, 1e-6);

        let many = bounds.normalize_points(&[bounds.lower(), p]);
        assert_eq!(many[0], point![-1.0, -1.0, -1.0]);
        assert_eq!(many[1], bounds.normalize(&p));
    }

    #[test]
    fn default_box() {
        let bounds = SceneBounds::default();
        assert_eq!(bounds, SceneBounds::cube(1.5).unwrap());
        assert!(bounds.is_in(&point![0.0, 1.4, -1.4]));
        assert!(!bounds.is_in(&point![0.0, 1.6, 0.0]));
    }

    #[test]
    fn ray_through_box() {
        let bounds = SceneBounds::cube(1.0).unwrap();
        let ray = Ray::new(point![-3.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]);
        assert_eq!(bounds.intersect(&ray), Some((2.0, 4.0)));

        let behind = Ray::new(point![3.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]);
        assert_eq!(bounds.intersect(&behind), None);

        let miss = Ray::new(point![-3.0, 2.0, 0.0], vector![1.0, 0.0, 0.0]);
        assert_eq!(bounds.intersect(&miss), None);
    }
}
