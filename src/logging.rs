use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `debug` or
/// `wca_results::scoring=trace`.
pub const LOG_ENV: &str = "WCA_RESULTS_LOG";

/// Initialize the tracing subscriber, writing to stderr.
///
/// Respects `WCA_RESULTS_LOG` when set. Otherwise defaults to `warn`, or
/// `debug` when `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}
