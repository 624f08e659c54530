use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to stderr so it never interleaves with prompts on stdout.
/// `RUST_LOG` takes precedence, otherwise `verbosity` (the number of `-v` flags) picks the level.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
