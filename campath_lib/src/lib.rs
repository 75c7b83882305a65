/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

//! Camera trajectories and per-pixel ray casting for volumetric rendering.
//!
//! A path is generated from a polynomial parameterization of spherical coordinates
//! ([`trajectory`]), combined with pinhole [`Intrinsics`] and cast into rays ([`render`]).
//! Paths travel between processes as JSON scene descriptions ([`scene`]).

pub mod camera;
pub mod common;
mod error;
pub mod render;
pub mod scene;
pub mod test_helpers;
pub mod trajectory;

pub use camera::{AxisConvention, CameraPath, Intrinsics, Pose};
pub use error::{CamPathError, Result};
pub use render::{cast_rays, cast_rays_with, CastOptions, RayBatch, RayLayout};
pub use scene::SceneDescription;
pub use trajectory::{generate, TimelineConfig, TrajectorySpec};

/// Generate a path and cast rays of all its frames.
///
/// Generated poses look down `-backward`, so they are cast in the OpenGL convention.
pub fn path_rays(
    spec: &TrajectorySpec,
    timeline: &TimelineConfig,
    intrinsics: &Intrinsics,
    layout: RayLayout,
) -> Result<RayBatch> {
    let path = generate(spec, timeline)?;
    let options = CastOptions::builder()
        .layout(layout)
        .convention(AxisConvention::OpenGl)
        .build();
    cast_rays_with(&path, intrinsics, &options)
}
