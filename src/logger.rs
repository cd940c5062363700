//! Logger setup shared by the binary and the integration tests.

/// Initializes `env_logger` at Info level, or Debug when `verbose` is set.
///
/// `RUST_LOG` still takes precedence when it is present in the environment.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
