//! Logging for veeamrun
//!
//! All diagnostics go through `tracing`. A single subscriber is installed at
//! process start and writes plain lines to a size-rotated log file:
//!
//! ```text
//! 2026-10-19 02:15:07 AM launch job nightly
//! ```
//!
//! # Components
//!
//! - `RotatingFile`: append-only file writer that rotates by size and keeps a
//!   bounded number of numbered backups (`veeamrun.log.1`, `veeamrun.log.2`, ...).
//! - `build_subscriber`: the fmt subscriber with the local 12-hour timestamp.
//! - `init_logging`: installs the subscriber for the whole process.

mod rotating;

use std::fmt;
use std::sync::Mutex;

use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::{VeeamrunError, VeeamrunResult};

pub use rotating::RotatingFile;

/// Timestamp format of every log line
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Local wall-clock timestamp in `LOG_TIME_FORMAT`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(LOG_TIME_FORMAT))
    }
}

/// Build the log subscriber writing to `writer`, filtered by `level`
pub fn build_subscriber<W>(
    writer: W,
    level: &str,
) -> VeeamrunResult<impl Subscriber + Send + Sync + 'static>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(level)
        .map_err(|e| VeeamrunError::Log(format!("Invalid log level '{}': {}", level, e)))?;

    Ok(tracing_subscriber::fmt()
        .with_writer(writer)
        .with_timer(LocalTimestamp)
        .with_ansi(false)
        .with_level(false)
        .with_target(false)
        .with_env_filter(filter)
        .finish())
}

/// Install the process-wide logger described by `settings`
///
/// Must be called once, before anything is logged.
pub fn init_logging(settings: &Settings) -> VeeamrunResult<()> {
    let file = RotatingFile::open(
        &settings.log_file,
        settings.log_max_bytes,
        settings.log_backups,
    )?;
    let subscriber = build_subscriber(Mutex::new(file), &settings.log_level)?;

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| VeeamrunError::Log(format!("Failed to install logger: {}", e)))
}
