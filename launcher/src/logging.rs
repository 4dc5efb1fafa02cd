//! Development-time tracing for debugging the launcher.
//!
//! Tracing is dev diagnostics only, gated by `RUST_LOG` and written to
//! stderr. The launcher's product-visible output contract is exactly one
//! fixed diagnostic line on the missing-artifact path; nothing here may
//! stand in for it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, so a normal invocation
/// emits no tracing output at all.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
