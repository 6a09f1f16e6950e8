use log::LevelFilter;

/// `RUST_LOG` is read first; `level` then overrides the global filter.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
