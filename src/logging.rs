//! Tracing subscriber setup for the command-line driver
//!
//! Logs go to stderr so that board output on stdout stays clean. `RUST_LOG`
//! takes precedence over the `-v` count when it is set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

/// Map a `-v` count to a level: warn, info, debug, then trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let console = layer()
        .compact()
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .boxed();

    tracing_subscriber::registry().with(filter).with(console).try_init()
}
