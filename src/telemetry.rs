//! Logging initialization
//!
//! Wires the recognized `log_level` / `log_file` options to a global
//! `tracing` subscriber. Library code only emits `tracing` events; hosts
//! that already install their own subscriber can skip this entirely.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{AdminError, Result};

/// Install a global subscriber with the given filter directive
///
/// `level` accepts anything `EnvFilter` does (`"info"`, `"warn"`,
/// `"hbase_rest_admin=debug"`, ...). With a `file`, output is appended
/// there without ANSI escapes; otherwise it goes to stderr.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> hbase_rest_admin::Result<()> {
/// hbase_rest_admin::telemetry::init("info", None)?;
/// # Ok(()) }
/// ```
pub fn init(level: &str, file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| AdminError::Config(format!("invalid log level '{level}': {e}")))?;

    match file {
        Some(path) => {
            let log_file = std::fs::File::options()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Arc::new(log_file))
                        .with_ansi(false),
                )
                .try_init()
                .map_err(|e| AdminError::Config(format!("subscriber already set: {e}")))
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| AdminError::Config(format!("subscriber already set: {e}"))),
    }
}
