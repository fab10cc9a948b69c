//! Command-line front end for located diagnostics.
//!
//! Reads diagnostic text on stdin and prints it with repeated location
//! leads collapsed and bodies wrapped to the terminal width.

mod config;

pub use config::{parse_args, ArgError, CliConfig};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=salad_diagnostic=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Format `input` per `config`.
pub fn render(input: &str, config: &CliConfig) -> String {
    tracing::debug!(width = ?config.width, bytes = input.len(), "rendering diagnostics");
    salad_diagnostic::format_diagnostics(input, config.format_options())
}
