//! Runtime initialization for the binary.

use log::LevelFilter;

/// Map `-v` occurrences to a log level; warnings are always shown.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();

    // Only fails when a logger is already installed, which then keeps working.
    let _ = builder.try_init();
}
