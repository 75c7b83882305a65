/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

//! Module with helper functions
//! Saves repetition in unit tests, integration tests and benches

use std::f32::consts::FRAC_PI_2;

use nalgebra::Vector3;

use crate::{camera::Intrinsics, trajectory::TrajectorySpec};

/// Assert `actual` is within absolute `tolerance` of `expected`
pub fn compare_float(actual: f32, expected: f32, tolerance: f32) {
    let err = f32::abs(actual - expected);
    assert!(
        err <= tolerance,
        "{actual} differs from {expected} by {err} (tolerance {tolerance})"
    );
}

/// Component-wise [`compare_float`]
pub fn compare_vec(actual: &Vector3<f32>, expected: &Vector3<f32>, tolerance: f32) {
    for i in 0..3 {
        let err = f32::abs(actual[i] - expected[i]);
        assert!(
            err <= tolerance,
            "{actual} differs from {expected} on axis {i} (tolerance {tolerance})"
        );
    }
}

/// Radius 2, on the equator, one revolution per duration
pub fn orbit_spec() -> TrajectorySpec {
    TrajectorySpec::new(vec![2.0, 0.0], vec![FRAC_PI_2, 0.0], vec![0.0, 1.0]).unwrap()
}

/// 800x800 image, focal 400, principal point in the middle
pub fn square_intrinsics() -> Intrinsics {
    Intrinsics::new(400.0, 400.0, 400.0, 400.0, 800, 800).unwrap()
}
