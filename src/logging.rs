//! Diagnostic logging for the crate itself
//!
//! Written through `tracing` to a rolling file, never through the `log`
//! facade: that facade belongs to the interceptor, and records about the
//! console must not land in the console.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Initialize the diagnostics subsystem
///
/// Logs are written to `~/.local/share/termcon/logs/`
/// Log level is controlled by `TERMCON_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TERMCON_LOG=debug termcon
/// TERMCON_LOG=trace termcon
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "termcon.log");

    // Default to info, allow override via TERMCON_LOG
    let env_filter = EnvFilter::try_from_env("TERMCON_LOG")
        .unwrap_or_else(|_| EnvFilter::new("termcon=info,warn"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_timer(fmt::time::ChronoLocal::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            )),
    );

    // set_global_default instead of SubscriberInitExt::init: init would
    // also claim the `log` facade for the tracing bridge, and that slot
    // belongs to the interceptor.
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::logging_init(e.to_string()))?;

    tracing::info!("════════════════════════════════════════════");
    tracing::info!("termcon starting");
    tracing::info!("Diagnostics file under {}", log_dir.display());
    tracing::info!("════════════════════════════════════════════");

    Ok(())
}

/// Platform data dir, falling back to the working directory
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("termcon").join("logs")
}
