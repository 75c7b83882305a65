/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

mod caster;
mod cast_options;
mod ray_batch;

pub use cast_options::{CastOptions, CastOptionsBuilder};
pub use caster::{cast_rays, cast_rays_with};
pub use ray_batch::{RayBatch, RayLayout};
