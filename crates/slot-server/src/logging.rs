//! Tracing setup for the `slots` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at INFO unless `RUST_LOG` says otherwise.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level.
///
/// `RUST_LOG` still takes precedence. Output goes to stderr so that JSON
/// printed by the CLI on stdout stays machine-readable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
