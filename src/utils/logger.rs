//! Logging setup for binaries and tests

use once_cell::sync::OnceCell;
use tracing::Level;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber once.
///
/// The level is taken from the `LOGLEVEL` environment variable (trace,
/// debug, info, warn, error), defaulting to info. Repeated calls are no-ops,
/// so tests can call this freely.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let level = match std::env::var("LOGLEVEL")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
    });
}
