use campath_lib::{Result, TrajectorySpec};

/// Base radius is scaled up, so the camera starts away from the origin
const RADIUS_SCALE: f32 = 10.0;

/// Random coefficients in `[0, 1)` for every track
///
/// Same `seed` gives the same coefficients.
pub fn random_spec(order: usize, seed: Option<u64>) -> Result<TrajectorySpec> {
    let rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let draw = || -> Vec<f32> { (0..order).map(|_| rng.f32()).collect() };
    let mut radius = draw();
    let polar = draw();
    let azimuth = draw();

    if let Some(base) = radius.first_mut() {
        *base *= RADIUS_SCALE;
    }

    TrajectorySpec::new(radius, polar, azimuth)
}
