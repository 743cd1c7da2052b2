//! Development-time tracing for debugging the shell and store.
//!
//! Dev diagnostics only, output to stderr; never part of the product output
//! the menu renders.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. When unset, defaults to `warn`, or to `roster=debug`
/// with `verbose`. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=roster=debug roster --file staff.csv
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
