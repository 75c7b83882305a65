use config::Config;
use log::{debug, error, info};

mod args;
mod config;
mod file;
mod generators;
mod logger;

use crate::{args::get_command, generators::generate_scene, logger::init_logger};

pub fn main() {
    let cmd = get_command();

    let args = cmd.get_matches();

    let cfg = Config::from_args(args);

    let cfg = match cfg {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_logger(cfg.log_level);

    info!("Generating camera path...");
    debug!("{:?}", cfg);

    if let Err(e) = generate_scene(&cfg) {
        error!("{e}");
        std::process::exit(1);
    }
}
