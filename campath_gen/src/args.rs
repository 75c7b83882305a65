//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if n > 0.0 && n.is_finite() {
                Ok(())
            } else {
                Err("Number must be greater than 0.0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

// any 64bit value, zero included
pub fn is_seed(num: &str) -> Result<(), String> {
    num.parse::<u64>()
        .map(|_| ())
        .map_err(|_| "Unsigned 64bit number required".into())
}

// any finite value, coefficients may be negative
pub fn is_float(num: &str) -> Result<(), String> {
    match num.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err("Finite number required".into()),
    }
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

fn coefficients_arg<'a>(name: &'a str, help: &'a str) -> Arg<'a> {
    Arg::new(name)
        .help(help)
        .long(name)
        .takes_value(true)
        .multiple_values(true)
        .value_name("C0,C1,..")
        .use_value_delimiter(true)
        .require_value_delimiter(true)
        .require_equals(true)
        .allow_hyphen_values(true)
        .validator(is_float)
}

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Campath-gen")
        .author("campath contributors")
        .version("0.1.0")
        .about("Camera path generator, writes scene description for volumetric rendering")
        .arg(
            Arg::new("fps")
                .help("Frames per second")
                .long("fps")
                .short('f')
                .default_value("30")
                .value_name("FPS")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("duration")
                .help("Duration of the path in seconds")
                .long("duration")
                .short('t')
                .default_value("6")
                .value_name("SECONDS")
                .validator(is_float_number),
        )
        .arg(coefficients_arg(
            "radius",
            "Radius derivatives, change over the whole duration [default: 1,0]",
        ))
        .arg(coefficients_arg(
            "polar",
            "Polar angle derivatives, 0th in radians, others in rotations per duration [default: pi/2,0]",
        ))
        .arg(coefficients_arg(
            "azimuth",
            "Azimuth derivatives, 0th in radians, others in rotations per duration [default: 0,1]",
        ))
        .arg(
            Arg::new("random-order")
                .help("Draw random coefficients of given order")
                .long("random-order")
                .value_name("ORDER")
                .conflicts_with_all(&["radius", "polar", "azimuth", "orbit"])
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .requires("random-order")
                .validator(is_seed),
        )
        .arg(
            Arg::new("orbit")
                .help("Fixed elevation orbit around the origin instead of a polynomial path")
                .long("orbit")
                .conflicts_with_all(&["radius", "polar", "azimuth"]),
        )
        .arg(
            Arg::new("views")
                .help("Number of orbit views")
                .long("views")
                .value_name("N")
                .requires("orbit")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("elevation")
                .help("Orbit elevation in degrees")
                .long("elevation")
                .value_name("DEG")
                .allow_hyphen_values(true)
                .requires("orbit")
                .validator(is_float),
        )
        .arg(
            Arg::new("orbit-radius")
                .help("Orbit distance from the origin")
                .long("orbit-radius")
                .value_name("R")
                .requires("orbit")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("resolution")
                .help("Image resolution")
                .long("resolution")
                .short('r')
                .number_of_values(2)
                .value_names(&["W", "H"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["800", "800"])
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("fov")
                .help("Horizontal field of view in radians, used when focal lengths are not given")
                .long("fov")
                .value_name("RAD")
                .default_value("0.6911112")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("focal")
                .help("Focal lengths in pixels")
                .long("focal")
                .number_of_values(2)
                .value_names(&["FX", "FY"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_float_number),
        )
        .arg(
            Arg::new("principal")
                .help("Principal point in pixels, defaults to the image center")
                .long("principal")
                .number_of_values(2)
                .value_names(&["CX", "CY"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .allow_hyphen_values(true)
                .validator(is_float),
        )
        .arg(
            Arg::new("output-file")
                .help("File name to output")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("transforms_render.json")),
        )
        .arg(
            Arg::new("log-level")
                .help("Logging level, RUST_LOG takes precedence")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("info")
                .possible_values(LOG_LEVELS),
        )
}
