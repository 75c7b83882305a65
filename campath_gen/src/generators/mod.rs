use std::{
    error::Error,
    io::{BufWriter, Write},
};

use campath_lib::{
    generate,
    trajectory::{render_path, to_spherical},
    CameraPath, SceneDescription,
};
use log::{debug, info};

use crate::{
    config::{Config, PathConfig},
    file::open_create_file,
};

mod random;

pub use random::random_spec;

/// Build camera path described by `config`
pub fn build_path(config: &PathConfig) -> Result<CameraPath, Box<dyn Error>> {
    let path = match config {
        PathConfig::Polynomial { spec, timeline } => generate(spec, timeline)?,
        PathConfig::Random {
            order,
            seed,
            timeline,
        } => {
            let spec = random_spec(*order, *seed)?;
            debug!("Random coefficients {:?}", spec);
            generate(&spec, timeline)?
        }
        PathConfig::Orbit(orbit) => render_path(orbit)?,
    };
    Ok(path)
}

/// Generate path and write scene description to the configured file
pub fn generate_scene(config: &Config) -> Result<(), Box<dyn Error>> {
    let path = build_path(&config.path)?;
    info!("Generated {} poses", path.len());
    if let (Some(first), Some(last)) = (path.poses().first(), path.poses().last()) {
        let (r0, theta0, phi0) = to_spherical(&first.position());
        let (r1, theta1, phi1) = to_spherical(&last.position());
        debug!("Start (r, theta, phi) = ({r0:.3}, {theta0:.3}, {phi0:.3})");
        debug!("End (r, theta, phi) = ({r1:.3}, {theta1:.3}, {phi1:.3})");
    }

    let scene = SceneDescription::new(path, config.intrinsics);
    let file = open_create_file(&config.file_name)?;
    let mut writer = BufWriter::new(file);
    scene.to_writer(&mut writer)?;
    // Errors of the final write only show up here, not on drop
    writer.flush()?;

    info!("Scene written to {:?}", config.file_name);
    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;
    use std::{ffi::OsString, fs::File};

    use campath_lib::{trajectory::OrbitConfig, Intrinsics, TimelineConfig, TrajectorySpec};
    use log::LevelFilter;

    fn orbit_config(file_name: OsString) -> Config {
        Config {
            path: PathConfig::Orbit(OrbitConfig {
                views: 2,
                ..Default::default()
            }),
            intrinsics: Intrinsics::centered(10.0, 10.0, 8, 8).unwrap(),
            file_name,
            log_level: LevelFilter::Off,
        }
    }

    #[test]
    fn scene_written() {
        let file_name = std::env::temp_dir().join("campath_gen_scene_written.json");
        generate_scene(&orbit_config(file_name.clone().into_os_string())).unwrap();

        let scene = SceneDescription::from_reader(File::open(&file_name).unwrap()).unwrap();
        assert_eq!(scene.path().len(), 2);
        assert_eq!(scene.intrinsics().resolution(), (8, 8));
        std::fs::remove_file(&file_name).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_disk_reported() {
        // every write to /dev/full fails with ENOSPC
        let res = generate_scene(&orbit_config(OsString::from("/dev/full")));
        assert!(res.is_err());
    }

    #[test]
    fn polynomial_path() {
        let config = PathConfig::Polynomial {
            spec: TrajectorySpec::default(),
            timeline: TimelineConfig::new(4, 2.0).unwrap(),
        };
        let path = build_path(&config).unwrap();
        assert_eq!(path.len(), 8);
    }

    #[test]
    fn random_path_is_reproducible() {
        let config = PathConfig::Random {
            order: 3,
            seed: Some(42),
            timeline: TimelineConfig::new(5, 1.0).unwrap(),
        };
        let a = build_path(&config).unwrap();
        let b = build_path(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn orbit_path() {
        let config = PathConfig::Orbit(OrbitConfig::default());
        let path = build_path(&config).unwrap();
        assert_eq!(path.len(), 40);
    }
}
