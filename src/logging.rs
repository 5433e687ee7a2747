//! Diagnostic log setup.

use color_eyre::eyre::{Result, WrapErr as _};
use tracing_subscriber::{util::SubscriberInitExt as _, EnvFilter, FmtSubscriber};

/// Installs the global log subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbosity` picks the level for this crate, from
/// `warn` at zero up to `trace` at three or more. Logs are written to standard error so that
/// standard output only carries rendered mazes.
///
/// # Errors
///
/// This function returns an error if a global subscriber was already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mazeroute={}", level(verbosity))));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
        .wrap_err("failed to install log subscriber")
}

/// Maps a `-v` count onto a level directive.
const fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
