//! Diagnostic logging. Silent unless `DEPLOY_WEBHOOK_LOG` asks for it, and
//! always on stderr so stdout stays the operator transcript.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "DEPLOY_WEBHOOK_LOG";

const DEFAULT_DIRECTIVE: &str = "off";

/// Build the filter from `LOG_ENV`, falling back to `off` when it is unset
/// or unparsable.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(console)
        .try_init();
}
