//! termcon - An embeddable debug console overlay for terminal apps
//!
//! This is the demo binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use termcon::app::RunOptions;
use termcon::prelude::*;

/// termcon - An embeddable debug console overlay for terminal apps
#[derive(Parser, Debug)]
#[command(name = "termcon")]
#[command(about = "An embeddable debug console overlay for terminal apps", long_about = None)]
struct Args {
    /// Path to a console template file (TOML)
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Start with the demo traffic generator paused
    #[arg(long)]
    quiet: bool,

    /// Milliseconds between generated traffic records
    #[arg(long, value_name = "N", default_value_t = 750)]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    termcon::app::run(RunOptions {
        template: args.template,
        quiet: args.quiet,
        interval_ms: args.interval_ms,
    })
    .await
}
