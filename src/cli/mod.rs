//! CLI command definitions, argument parsing and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

use twurlrc::constants::ENV_LOG;

/// Install the stderr log subscriber.
///
/// `TWURLRC_LOG` takes precedence; otherwise only warnings are shown,
/// or debug output with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "twurlrc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
