/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

//! Camera paths from polynomial trajectories in spherical coordinates.

use std::f32::consts::FRAC_PI_2;

use log::{debug, trace};

use crate::{
    camera::CameraPath,
    error::{invalid, CamPathError, Result},
};

pub mod orbit;
pub mod polynomial;
mod spherical;

pub use orbit::{render_path, spherical_pose, OrbitConfig};
pub use polynomial::ParamKind;
pub use spherical::{to_spherical, SphericalFrame};

/// Radius below this is treated as zero
const MIN_RADIUS: f32 = 1e-6;

/// Longest timeline, frame indices are exact in `f32` up to `2^24`
pub const MAX_FRAMES: usize = 1 << 24;

/// Coefficients of radius, polar angle and azimuth tracks.
///
/// Column `k` holds the `k`-th derivatives, see [`polynomial`] for their normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySpec {
    radius: Vec<f32>,
    polar: Vec<f32>,
    azimuth: Vec<f32>,
}

impl TrajectorySpec {
    /// Construct new spec.
    ///
    /// All three tracks must have the same, non-zero length and finite values.
    pub fn new(radius: Vec<f32>, polar: Vec<f32>, azimuth: Vec<f32>) -> Result<TrajectorySpec> {
        if radius.is_empty() {
            return Err(invalid("trajectory order must be at least 1"));
        }
        if radius.len() != polar.len() || radius.len() != azimuth.len() {
            return Err(invalid(format!(
                "coefficient tracks differ in length (radius {}, polar {}, azimuth {})",
                radius.len(),
                polar.len(),
                azimuth.len()
            )));
        }
        let all_finite = radius
            .iter()
            .chain(polar.iter())
            .chain(azimuth.iter())
            .all(|c| c.is_finite());
        if !all_finite {
            return Err(invalid("coefficients must be finite"));
        }

        Ok(TrajectorySpec {
            radius,
            polar,
            azimuth,
        })
    }

    /// Camera standing still at `(r, theta, phi)`
    pub fn fixed(r: f32, theta: f32, phi: f32) -> Result<TrajectorySpec> {
        TrajectorySpec::new(vec![r], vec![theta], vec![phi])
    }

    /// Number of coefficients per track
    pub fn order(&self) -> usize {
        self.radius.len()
    }

    pub fn radius(&self) -> &[f32] {
        &self.radius
    }

    pub fn polar(&self) -> &[f32] {
        &self.polar
    }

    pub fn azimuth(&self) -> &[f32] {
        &self.azimuth
    }
}

/// Unit radius, on the equator, one revolution per duration
impl Default for TrajectorySpec {
    fn default() -> Self {
        TrajectorySpec {
            radius: vec![1.0, 0.0],
            polar: vec![FRAC_PI_2, 0.0],
            azimuth: vec![0.0, 1.0],
        }
    }
}

/// Frame timing of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    fps: u32,
    duration: f32,
}

impl TimelineConfig {
    /// Construct new timeline.
    ///
    /// `fps` and `duration` (seconds) must be positive and give between one and
    /// [`MAX_FRAMES`] frames.
    pub fn new(fps: u32, duration: f32) -> Result<TimelineConfig> {
        if fps == 0 {
            return Err(invalid("fps must be greater than 0"));
        }
        if !(duration > 0.0) || !duration.is_finite() {
            return Err(invalid(format!(
                "duration must be positive, got {duration}"
            )));
        }
        let frames = (fps as f32 * duration).round();
        if !frames.is_finite() || frames > MAX_FRAMES as f32 {
            return Err(invalid(format!(
                "{fps} fps over {duration} s gives more than {MAX_FRAMES} frames"
            )));
        }
        let timeline = TimelineConfig { fps, duration };
        if timeline.frame_count() == 0 {
            return Err(invalid(format!(
                "{fps} fps over {duration} s gives no frames"
            )));
        }
        Ok(timeline)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// `fps * duration`, rounded to whole frames
    pub fn frame_count(&self) -> usize {
        (self.fps as f32 * self.duration).round() as usize
    }

    /// Uniform samples of `[0, duration)`, `duration * i / frame_count`
    pub fn sample_times(&self) -> Vec<f32> {
        let n = self.frame_count();
        (0..n)
            .map(|i| self.duration * i as f32 / n as f32)
            .collect()
    }
}

/// 30 fps, 6 seconds
impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            fps: 30,
            duration: 6.0,
        }
    }
}

/// Generate camera path.
///
/// All parameter tracks are evaluated and checked before any pose is built.
///
/// # Errors
/// * [`CamPathError::InvalidConfiguration`] - radius of some frame is zero
/// * [`CamPathError::NumericDegeneracy`] - evaluated parameter is not finite
pub fn generate(spec: &TrajectorySpec, timeline: &TimelineConfig) -> Result<CameraPath> {
    let times = timeline.sample_times();
    let duration = timeline.duration();

    let r = polynomial::evaluate(spec.radius(), ParamKind::Linear, duration, &times);
    let theta = polynomial::evaluate(spec.polar(), ParamKind::Angular, duration, &times);
    let phi = polynomial::evaluate(spec.azimuth(), ParamKind::Angular, duration, &times);

    for (i, ((r, theta), phi)) in r.iter().zip(theta.iter()).zip(phi.iter()).enumerate() {
        if !r.is_finite() || !theta.is_finite() || !phi.is_finite() {
            return Err(CamPathError::NumericDegeneracy(format!(
                "frame {i}: spherical parameters not finite (r {r}, theta {theta}, phi {phi})"
            )));
        }
        if r.abs() < MIN_RADIUS {
            return Err(invalid(format!(
                "frame {i}: radius {r} places camera at the origin"
            )));
        }
    }

    let poses = r
        .iter()
        .zip(theta.iter())
        .zip(phi.iter())
        .enumerate()
        .map(|(i, ((&r, &theta), &phi))| {
            trace!("frame {i}: r {r} theta {theta} phi {phi}");
            SphericalFrame::from_spherical(r, theta, phi).to_pose()
        })
        .collect();

    debug!(
        "Generated path: {} frames, order {}, {} fps over {} s",
        times.len(),
        spec.order(),
        timeline.fps(),
        duration
    );

    Ok(CameraPath::new(poses))
}
