use tracing_subscriber::EnvFilter;

use crate::models::Config;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise debug mode logs at `debug` and
/// everything else at `warn`. Calling this twice is harmless.
pub fn init_logging(config: &Config) {
    let default_level = if config.debug_mode { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("Debug logging enabled");
    }
}
