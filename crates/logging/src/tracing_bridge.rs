//! Bridge between the `tracing` crate and the command-line verbosity flags.
//!
//! Internal events emitted through `tracing` macros (the engine uses targets
//! such as `nosync::exclude`) stay invisible at the default verbosity and
//! appear on stderr once `-v` is repeated enough times. The `NOSYNC_LOG`
//! environment variable overrides the flag-derived filter with a full
//! [`EnvFilter`] directive string for ad-hoc debugging.

use std::io;

use tracing_subscriber::EnvFilter;

use super::verbosity::Verbosity;

/// Environment variable consulted for an explicit tracing filter.
pub const LOG_ENV_VAR: &str = "NOSYNC_LOG";

/// Installs the global tracing subscriber for the given verbosity.
///
/// Events are formatted without timestamps or targets and written to stderr,
/// keeping stdout reserved for the tool's own output. Calling this more than
/// once in the same process is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(verbosity.tracing_filter().into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
