//! App orchestration: state, messages, transitions, background tasks

pub mod message;
pub mod signals;
pub mod state;
pub mod tasks;
pub mod update;

pub use update::{handle_key, update, UpdateResult};

use std::path::PathBuf;

use crate::prelude::*;
use crate::tui;

/// Options for a demo run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Explicit template path (default: the platform config dir)
    pub template: Option<PathBuf>,
    /// Start with the traffic generator paused
    pub quiet: bool,
    /// Milliseconds between synthetic records
    pub interval_ms: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            template: None,
            quiet: false,
            interval_ms: 750,
        }
    }
}

/// Entry point for the demo binary.
///
/// Sets up panic reports and file diagnostics, then hands off to the TUI.
pub async fn run(options: RunOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Diagnostics go to a file, the TUI owns stdout
    crate::logging::init()?;

    info!(
        "Demo options: template={:?} quiet={} interval={}ms",
        options.template, options.quiet, options.interval_ms
    );

    let result = tui::run(options).await;

    if let Err(ref e) = result {
        error!("Demo exited with error: {:?}", e);
    }

    info!("termcon exiting");
    result
}
