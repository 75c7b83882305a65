/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use log::{debug, trace};
use nalgebra::Vector3;
use rayon::prelude::*;

use crate::{
    camera::{AxisConvention, CameraPath, Intrinsics, Pose},
    common::Ray,
    error::{CamPathError, Result},
};

use super::{CastOptions, RayBatch};

/// World direction shorter than this can not be normalized
const MIN_DIRECTION_NORM: f32 = 1e-6;

/// Cast one ray per pixel of every frame, with default [`CastOptions`].
///
/// Poses are taken in the OpenCV convention: the rotation block is applied to
/// camera space directions `((px - cx) / fx, (py - cy) / fy, 1)` as-is.
pub fn cast_rays(path: &CameraPath, intrinsics: &Intrinsics) -> Result<RayBatch> {
    cast_rays_with(path, intrinsics, &CastOptions::default())
}

/// Cast one ray per pixel of every frame.
///
/// Rays of one frame share the origin, the camera position.
/// Directions are unit length. The batch keeps `(frame, pixel)` order,
/// even when frames are cast in parallel.
///
/// # Errors
/// [`CamPathError::NumericDegeneracy`] if some direction collapses to zero length
/// (singular rotation block). No rays are returned in that case.
pub fn cast_rays_with(
    path: &CameraPath,
    intrinsics: &Intrinsics,
    options: &CastOptions,
) -> Result<RayBatch> {
    // Camera space directions are the same for every frame
    let directions = intrinsics.pixel_directions();
    let convention = options.convention;

    let frames: Vec<Vec<Ray>> = if options.multi_thread {
        path.poses()
            .par_iter()
            .enumerate()
            .map(|(i, pose)| cast_frame(i, pose, &directions, convention))
            .collect::<Result<_>>()?
    } else {
        path.poses()
            .iter()
            .enumerate()
            .map(|(i, pose)| cast_frame(i, pose, &directions, convention))
            .collect::<Result<_>>()?
    };

    let rays: Vec<Ray> = frames.into_iter().flatten().collect();

    debug!(
        "Cast {} rays: {} frames at {}x{}, {:?}",
        rays.len(),
        path.len(),
        intrinsics.width(),
        intrinsics.height(),
        options
    );

    Ok(RayBatch::new(
        rays,
        path.len(),
        intrinsics.pixel_count(),
        options.layout,
    ))
}

fn cast_frame(
    frame: usize,
    pose: &Pose,
    directions: &[Vector3<f32>],
    convention: AxisConvention,
) -> Result<Vec<Ray>> {
    let pose = match convention {
        AxisConvention::OpenCv => *pose,
        AxisConvention::OpenGl => pose.to_opencv(),
    };
    let rotation = pose.rotation();
    let origin = pose.position();
    trace!("frame {frame}: origin {origin}");

    directions
        .iter()
        .enumerate()
        .map(|(pixel, dir)| {
            let world = rotation * dir;
            let norm = world.norm();
            // also catches NaN
            if !(norm >= MIN_DIRECTION_NORM) {
                return Err(CamPathError::NumericDegeneracy(format!(
                    "frame {frame}, pixel {pixel}: ray direction of length {norm}"
                )));
            }
            Ok(Ray::new(origin, world / norm))
        })
        .collect()
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector, Matrix4};

    use super::*;
    use crate::{
        render::RayLayout,
        test_helpers::{compare_float, compare_vec, square_intrinsics},
        trajectory::SphericalFrame,
    };

    #[test]
    fn identity_pose() {
        let path = CameraPath::new(vec![Pose::identity()]);
        let intrinsics = square_intrinsics();
        let batch = cast_rays(&path, &intrinsics).unwrap();

        assert_eq!(batch.len(), 800 * 800);

        let center = batch.get(0, 400 * 800 + 400).unwrap();
        assert_eq!(center.direction, vector![0.0, 0.0, 1.0]);
        assert_eq!(center.origin, point![0.0, 0.0, 0.0]);

        let corner = batch.get(0, 0).unwrap();
        compare_vec(
            &corner.direction,
            &vector![-1.0, -1.0, 1.0].normalize(),
            1e-6,
        );
    }

    #[test]
    fn rays_share_origin() {
        let pose = SphericalFrame::from_spherical(3.0, 0.8, 1.9).to_pose();
        let path = CameraPath::new(vec![pose]);
        let intrinsics = Intrinsics::centered(20.0, 20.0, 16, 12).unwrap();
        let batch = cast_rays(&path, &intrinsics).unwrap();

        assert_eq!(batch.frame(0).unwrap().len(), 16 * 12);
        for ray in batch.flattened() {
            assert_eq!(ray.origin, pose.position());
            compare_float(ray.direction.magnitude(), 1.0, 1e-6);
        }
    }

    #[test]
    fn opengl_looks_at_origin() {
        let pose = SphericalFrame::from_spherical(2.0, 1.0, 0.3).to_pose();
        let path = CameraPath::new(vec![pose]);
        let intrinsics = Intrinsics::centered(10.0, 10.0, 4, 4).unwrap();
        let options = CastOptions::builder()
            .convention(AxisConvention::OpenGl)
            .build();
        let batch = cast_rays_with(&path, &intrinsics, &options).unwrap();

        // pixel at the principal point
        let center = batch.get(0, 2 * 4 + 2).unwrap();
        compare_vec(&center.direction, &(-pose.backward()), 1e-6);

        // image y grows against the camera up vector
        let below = batch.get(0, 3 * 4 + 2).unwrap();
        assert!(below.direction.dot(&pose.up()) < 0.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let path: CameraPath = (0..5)
            .map(|i| SphericalFrame::from_spherical(2.0, 1.0, i as f32).to_pose())
            .collect::<Vec<_>>()
            .into();
        let intrinsics = Intrinsics::centered(8.0, 8.0, 8, 6).unwrap();

        let seq = CastOptions::builder()
            .multi_thread(false)
            .layout(RayLayout::Stacked)
            .build();
        let par = CastOptions::builder()
            .multi_thread(true)
            .layout(RayLayout::Stacked)
            .build();

        let a = cast_rays_with(&path, &intrinsics, &seq).unwrap();
        let b = cast_rays_with(&path, &intrinsics, &par).unwrap();
        assert_eq!(a, b);

        for (frame, rays) in b.frames().enumerate() {
            assert_eq!(rays[0].origin, path.poses()[frame].position());
        }
    }

    #[test]
    fn singular_rotation() {
        let mut m = Matrix4::identity();
        m[(0, 0)] = 0.0;
        m[(1, 1)] = 0.0;
        m[(2, 2)] = 0.0;
        let path = CameraPath::new(vec![Pose::identity(), Pose::from_matrix(m).unwrap()]);
        let intrinsics = Intrinsics::centered(8.0, 8.0, 4, 4).unwrap();

        let err = cast_rays(&path, &intrinsics).unwrap_err();
        assert!(matches!(err, CamPathError::NumericDegeneracy(_)));
    }

    #[test]
    fn empty_path() {
        let intrinsics = Intrinsics::centered(8.0, 8.0, 4, 4).unwrap();
        let batch = cast_rays(&CameraPath::default(), &intrinsics).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.frame_count(), 0);
    }
}
