use log::LevelFilter;

/// Initialize `env_logger`, `RUST_LOG` overrides `level`
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    // Ignore error, logger may already be set in tests
    let _ = builder.try_init();
}
