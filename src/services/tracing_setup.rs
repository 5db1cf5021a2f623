//! Tracing subscriber setup
//!
//! The terminal is owned by the hex view, so all diagnostics go to a file.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber, logging to `log_file_path`.
///
/// Filtering follows `RUST_LOG`, with DEBUG as the default level.
pub fn init_global(log_file_path: &Path) -> io::Result<()> {
    let log_file = File::create(log_file_path)?;
    build_subscriber(log_file)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Build a subscriber that writes plain (uncolored) lines to `log_file`.
///
/// Shared by production and tests.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::DEBUG.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
