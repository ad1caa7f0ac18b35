//! Tracing setup for the binary.
//!
//! Logs go to stderr through a `fmt` layer; `RUST_LOG` overrides the default
//! level.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive`. Stdout is left alone: it carries the response body.
pub fn init_tracing(default_directive: impl Into<Directive>) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(default_directive.into())
                .from_env_lossy(),
        )
        .try_init()
}
