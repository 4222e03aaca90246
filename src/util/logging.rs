// facegrid - util/logging.rs
//
// Structured logging with runtime-selectable level.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Explicit level passed by the embedding shell
//
// Output: stderr. The embedding UI shell decides whether and when to call
// init(); library code only emits tracing events and never installs a
// subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `level` is an optional explicit level from the embedding shell.
/// Priority: RUST_LOG env var > explicit level > default "info".
pub fn init(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
