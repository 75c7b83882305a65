/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

//! Truncated Taylor series evaluation of one spherical parameter.
//!
//! Coefficient `k` is the `k`-th derivative at `t = 0`, expressed as the total
//! change over the whole duration. It is scaled by `1/k!` and `duration^-k`
//! before evaluation. Angular parameters count derivatives in whole rotations,
//! so their coefficients (except the 0th) are scaled by `2π` as well.

use std::f32::consts::TAU;

/// Interpretation of a coefficient track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain quantity, such as radius
    Linear,
    /// Angle in radians, derivatives given in rotations per duration
    Angular,
}

impl ParamKind {
    /// Scale applied to coefficient `k`.
    pub fn norm_factor(self, k: usize, duration: f32) -> f32 {
        // 1/k! * duration^-k, accumulated so that k! never overflows
        let mut factor = 1.0;
        for i in 1..=k {
            factor /= i as f32 * duration;
        }
        match self {
            ParamKind::Angular if k > 0 => TAU * factor,
            _ => factor,
        }
    }
}

/// Evaluate the series for every sample time.
///
/// # Params
/// * `coefs` - derivative magnitudes, `coefs[0]` being the value at `t = 0`
/// * `kind` - decides the normalization
/// * `duration` - length of the whole trajectory in seconds
/// * `times` - sample times
pub fn evaluate(coefs: &[f32], kind: ParamKind, duration: f32, times: &[f32]) -> Vec<f32> {
    let scaled: Vec<f32> = coefs
        .iter()
        .enumerate()
        .map(|(k, c)| c * kind.norm_factor(k, duration))
        .collect();

    times.iter().map(|&t| horner(&scaled, t)).collect()
}

fn horner(scaled: &[f32], t: f32) -> f32 {
    scaled.iter().rev().fold(0.0, |acc, c| acc * t + c)
}
