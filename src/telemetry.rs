//! Tracing subscriber setup.

use crate::config::LogFormat;
use tracing::debug;
use tracing_subscriber::{EnvFilter, prelude::*};

const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. Returns `false` when a
/// global subscriber was already installed, which is common in tests; the
/// existing subscriber stays in place.
#[must_use]
pub fn init_tracing(format: LogFormat) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .with(filter)
            .try_init(),
    };

    let installed = result.is_ok();
    if installed {
        debug!(?format, "tracing initialised");
    }
    installed
}
