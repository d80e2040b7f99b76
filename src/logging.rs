//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence; otherwise the level comes from the number of
//! `-v` flags (0 = warn, 1 = info, 2 = debug, 3+ = trace).

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = level_from_verbosity(verbose);
    let directive = format!("idmanager={}", level.as_str().to_ascii_lowercase());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
