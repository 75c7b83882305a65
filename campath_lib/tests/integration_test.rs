use campath_lib::{
    cast_rays, cast_rays_with,
    common::{NearFar, SceneBounds},
    generate, path_rays,
    test_helpers::{compare_float, compare_vec, orbit_spec, square_intrinsics},
    trajectory::{render_path, OrbitConfig},
    AxisConvention, CameraPath, CastOptions, Intrinsics, Pose, RayLayout, SceneDescription,
    TimelineConfig, TrajectorySpec,
};
use nalgebra::{point, vector};

pub const WIDTH: usize = 32;
pub const HEIGHT: usize = 24;

fn small_intrinsics() -> Intrinsics {
    Intrinsics::centered(30.0, 30.0, WIDTH, HEIGHT).unwrap()
}

#[test]
fn revolution_scenario() {
    let timeline = TimelineConfig::new(30, 1.0).unwrap();
    let path = generate(&orbit_spec(), &timeline).unwrap();

    assert_eq!(path.len(), 30);
    compare_vec(&path.poses()[0].position().coords, &vector![2.0, 0.0, 0.0], 1e-5);
    compare_vec(&path.poses()[15].position().coords, &vector![-2.0, 0.0, 0.0], 1e-5);
    assert!(path.iter().all(|pose| pose.is_orthonormal(1e-5)));
}

#[test]
fn identity_pose_scenario() {
    let path = CameraPath::new(vec![Pose::identity()]);
    let batch = cast_rays(&path, &square_intrinsics()).unwrap();

    assert_eq!(batch.pixels_per_frame(), 800 * 800);
    assert_eq!(batch.get(0, 400 * 800 + 400).unwrap().direction, vector![0.0, 0.0, 1.0]);
    compare_vec(
        &batch.get(0, 0).unwrap().direction,
        &vector![-1.0, -1.0, 1.0].normalize(),
        1e-6,
    );
}

#[test]
fn generate_serialize_parse_cast() {
    let spec = TrajectorySpec::new(
        vec![3.0, -0.5, 0.2],
        vec![1.0, 0.05, 0.0],
        vec![0.3, 1.0, 0.0],
    )
    .unwrap();
    let timeline = TimelineConfig::new(12, 2.0).unwrap();
    let path = generate(&spec, &timeline).unwrap();
    let scene = SceneDescription::new(path.clone(), small_intrinsics());

    let json = scene.to_json().unwrap();
    let parsed = SceneDescription::from_reader(json.as_bytes()).unwrap();

    for (a, b) in parsed.path().iter().zip(path.iter()) {
        for (x, y) in a.matrix().iter().zip(b.matrix().iter()) {
            compare_float(*x, *y, 1e-6);
        }
    }
    assert_eq!(parsed.intrinsics(), &small_intrinsics());

    let options = CastOptions::builder()
        .convention(AxisConvention::OpenGl)
        .layout(RayLayout::Stacked)
        .build();
    let batch = cast_rays_with(parsed.path(), parsed.intrinsics(), &options).unwrap();

    assert_eq!(batch.frame_count(), 24);
    assert_eq!(batch.shape(), vec![24, WIDTH * HEIGHT, 6]);
    for (frame, rays) in batch.frames().enumerate() {
        let origin = path.poses()[frame].position();
        assert_eq!(rays.len(), WIDTH * HEIGHT);
        for ray in rays {
            assert_eq!(ray.origin, origin);
            compare_float(ray.direction.magnitude(), 1.0, 1e-5);
        }
    }
}

#[test]
fn rays_hit_scene_box() {
    // camera orbits at radius 4, looking at the origin
    let spec = TrajectorySpec::new(vec![4.0, 0.0], vec![1.2, 0.0], vec![0.0, 1.0]).unwrap();
    let timeline = TimelineConfig::new(8, 1.0).unwrap();
    let batch = path_rays(&spec, &timeline, &small_intrinsics(), RayLayout::Flattened).unwrap();

    let bounds = SceneBounds::default();
    let near_far = NearFar::default();
    let center_pixel = (HEIGHT / 2) * WIDTH + WIDTH / 2;

    for frame in 0..batch.frame_count() {
        let ray = batch.get(frame, center_pixel).unwrap();
        let (t_min, t_max) = bounds.intersect(ray).expect("central ray misses the scene");
        assert!(t_min > near_far.near && t_max < near_far.far);

        // midpoint of the segment inside the box normalizes into [-1, 1]
        let inside = bounds.normalize(&ray.point_from_t(0.5 * (t_min + t_max)));
        assert!(inside.iter().all(|v| v.abs() <= 1.0));
    }
}

#[test]
fn orbit_render_path_cast() {
    let path = render_path(&OrbitConfig::default()).unwrap();
    let options = CastOptions::builder()
        .convention(AxisConvention::OpenGl)
        .build();
    let batch = cast_rays_with(&path, &small_intrinsics(), &options).unwrap();

    assert_eq!(batch.len(), 40 * WIDTH * HEIGHT);
    assert_eq!(batch.shape(), vec![40 * WIDTH * HEIGHT, 6]);

    let center_pixel = (HEIGHT / 2) * WIDTH + WIDTH / 2;
    let ray = batch.get(0, center_pixel).unwrap();
    // looking at the origin from distance 1
    compare_vec(&ray.point_from_t(1.0).coords, &vector![0.0, 0.0, 0.0], 1e-5);
}

#[test]
fn downsampled_cast() {
    let intrinsics = square_intrinsics().downsample(8.0).unwrap();
    let batch = cast_rays(&CameraPath::new(vec![Pose::identity()]), &intrinsics).unwrap();

    assert_eq!(batch.len(), 100 * 100);
    assert_eq!(batch.get(0, 50 * 100 + 50).unwrap().direction, vector![0.0, 0.0, 1.0]);
    assert_eq!(batch.get(0, 0).unwrap().origin, point![0.0, 0.0, 0.0]);
}
