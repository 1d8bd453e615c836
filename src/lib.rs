pub mod config;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod metrics;
pub mod pricing;
pub mod server;
pub mod signals;
pub mod survey;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once. Logs go to stderr so command
/// output on stdout stays clean; `json` selects JSON lines.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
