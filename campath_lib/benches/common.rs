pub use criterion::{criterion_group, criterion_main, Criterion};

pub use campath_lib::{
    cast_rays_with, generate, CameraPath, CastOptions, Intrinsics, RayLayout, TimelineConfig,
    TrajectorySpec,
};

pub const WIDTH: usize = 400;
pub const HEIGHT: usize = 300;

pub fn bench_spec() -> TrajectorySpec {
    TrajectorySpec::new(
        vec![3.0, 0.5, -0.2, 0.1],
        vec![1.2, 0.1, 0.0, 0.05],
        vec![0.0, 1.0, 0.3, 0.0],
    )
    .unwrap()
}

pub fn bench_path(frames: u32) -> CameraPath {
    let timeline = TimelineConfig::new(frames, 1.0).unwrap();
    generate(&bench_spec(), &timeline).unwrap()
}

pub fn bench_intrinsics() -> Intrinsics {
    Intrinsics::centered(350.0, 350.0, WIDTH, HEIGHT).unwrap()
}
