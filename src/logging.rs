//! Diagnostic logging
//!
//! Engine steps are reported through `tracing`. Output goes to stderr so it
//! never mixes with listings on stdout. Only warnings show by default;
//! `--verbose` raises the level to debug, and a filter directive in
//! `CBUNDLE_LOG` (e.g. `configbundle=trace`) takes precedence over both.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Filter used when `CBUNDLE_LOG` is unset or invalid
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "configbundle=debug" } else { "warn" }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
