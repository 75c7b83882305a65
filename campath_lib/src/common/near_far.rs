/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use crate::error::{invalid, Result};

/// Sampling range along a ray, in units of `t`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NearFar {
    /// Lower bound
    pub near: f32,
    /// Upper bound
    pub far: f32,
}

impl NearFar {
    /// Constructs new range, `0 <= near < far`
    pub fn new(near: f32, far: f32) -> Result<NearFar> {
        if !near.is_finite() || !far.is_finite() || near < 0.0 || near >= far {
            return Err(invalid(format!(
                "near/far range must satisfy 0 <= near < far, got {near}..{far}"
            )));
        }
        Ok(NearFar { near, far })
    }

    /// `n` evenly spaced values of `t`, both ends included
    pub fn steps(&self, n: usize) -> Vec<f32> {
        match n {
            0 => vec![],
            1 => vec![self.near],
            _ => {
                let step = (self.far - self.near) / (n - 1) as f32;
                (0..n).map(|i| self.near + step * i as f32).collect()
            }
        }
    }
}

impl Default for NearFar {
    fn default() -> Self {
        NearFar {
            near: 0.1,
            far: 100.0,
        }
    }
}
