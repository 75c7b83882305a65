use std::{ffi::OsString, str::FromStr};

use campath_lib::{trajectory::OrbitConfig, Intrinsics, TimelineConfig, TrajectorySpec};
use clap::ArgMatches;
use log::LevelFilter;

/// Transform `Values` into `Vec`, `None` if the argument is not present
fn values_to_vec<T>(args: &ArgMatches, key: &str) -> Result<Option<Vec<T>>, String>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let values = match args.values_of(key) {
        Some(v) => v,
        None => return Ok(None),
    };
    values
        .map(|v| v.parse::<T>().map_err(|e| format!("{key}: {e}")))
        .collect::<Result<Vec<T>, String>>()
        .map(Some)
}

fn value_of<T>(args: &ArgMatches, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    args.value_of(key)
        .map(|v| v.parse::<T>().map_err(|e| format!("{key}: {e}")))
        .transpose()
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Kind of path to generate
    pub path: PathConfig,
    /// Camera intrinsics written to the scene
    pub intrinsics: Intrinsics,
    // Output file name
    pub file_name: OsString,
    /// Level used unless `RUST_LOG` is set
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        let path = PathConfig::from_args(&args)?;

        // Intrinsics
        let resolution: Vec<usize> =
            values_to_vec(&args, "resolution")?.ok_or("resolution missing")?;
        let (width, height) = (resolution[0], resolution[1]);
        let focal: Option<Vec<f32>> = values_to_vec(&args, "focal")?;
        let principal: Option<Vec<f32>> = values_to_vec(&args, "principal")?;
        let fov: f32 = value_of(&args, "fov")?.ok_or("fov missing")?;

        let intrinsics = match (focal, principal) {
            (None, None) => Intrinsics::from_fov(fov, width, height),
            (Some(f), None) => Intrinsics::centered(f[0], f[1], width, height),
            (focal, Some(p)) => {
                let (fx, fy) = match focal {
                    Some(f) => (f[0], f[1]),
                    None => {
                        let fov_based = Intrinsics::from_fov(fov, width, height)
                            .map_err(|e| e.to_string())?;
                        (fov_based.focal_x(), fov_based.focal_y())
                    }
                };
                Intrinsics::new(fx, fy, p[0], p[1], width, height)
            }
        }
        .map_err(|e| e.to_string())?;

        // File name
        let file_name = args
            .value_of_os("output-file")
            .ok_or("output-file missing")?
            .into();

        let log_level = value_of(&args, "log-level")?.unwrap_or(LevelFilter::Info);

        Ok(Config {
            path,
            intrinsics,
            file_name,
            log_level,
        })
    }
}

/// Settings specific to path variant
#[derive(Debug, Clone)]
pub enum PathConfig {
    /// Polynomial path with given coefficients
    Polynomial {
        spec: TrajectorySpec,
        timeline: TimelineConfig,
    },
    /// Polynomial path with random coefficients
    Random {
        order: usize,
        seed: Option<u64>,
        timeline: TimelineConfig,
    },
    /// Fixed elevation orbit
    Orbit(OrbitConfig),
}

impl PathConfig {
    pub fn from_args(args: &ArgMatches) -> Result<PathConfig, String> {
        if args.is_present("orbit") {
            let default = OrbitConfig::default();
            let views = value_of(args, "views")?.unwrap_or(default.views);
            let elevation_deg = value_of(args, "elevation")?.unwrap_or(default.elevation_deg);
            let radius = value_of(args, "orbit-radius")?.unwrap_or(default.radius);
            return Ok(PathConfig::Orbit(OrbitConfig {
                views,
                elevation_deg,
                radius,
            }));
        }

        let fps: u32 = value_of(args, "fps")?.ok_or("fps missing")?;
        let duration: f32 = value_of(args, "duration")?.ok_or("duration missing")?;
        let timeline = TimelineConfig::new(fps, duration).map_err(|e| e.to_string())?;

        if let Some(order) = value_of(args, "random-order")? {
            let seed = value_of(args, "seed")?;
            return Ok(PathConfig::Random {
                order,
                seed,
                timeline,
            });
        }

        // Missing tracks fall back to the default circle
        let default = TrajectorySpec::default();
        let radius = values_to_vec(args, "radius")?.unwrap_or_else(|| default.radius().to_vec());
        let polar = values_to_vec(args, "polar")?.unwrap_or_else(|| default.polar().to_vec());
        let azimuth =
            values_to_vec(args, "azimuth")?.unwrap_or_else(|| default.azimuth().to_vec());
        let spec = TrajectorySpec::new(radius, polar, azimuth).map_err(|e| e.to_string())?;

        Ok(PathConfig::Polynomial { spec, timeline })
    }
}
