use env_logger::Env;

/// Initializes logging from `RUST_LOG`, falling back to a level chosen by `-v` count.
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
