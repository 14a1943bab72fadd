pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Stderr target keeps stdout clean for the report lines.
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
