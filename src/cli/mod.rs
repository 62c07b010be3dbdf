//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::compression::{compress_all, CompactConfig};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsoncompact")]
#[command(about = "Compress JSON files in a directory.")]
#[command(version)]
pub struct Args {
    /// The directory to process.
    #[arg()]
    pub directory: PathBuf,
}

/// Install the stderr diagnostics subscriber, filtered by `RUST_LOG` (default: warn)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Message printed when the argument is not an existing directory
pub fn invalid_directory_message(directory: &std::path::Path) -> String {
    format!("Error: '{}' is not a valid directory.", directory.display())
}

/// Run the tool for already-parsed arguments.
///
/// Returns `false` when the argument is not a directory and nothing was processed.
pub fn run(args: &Args) -> anyhow::Result<bool> {
    if !args.directory.is_dir() {
        println!("{}", invalid_directory_message(&args.directory));
        return Ok(false);
    }

    compress_all(&args.directory, &CompactConfig::default())
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    Ok(true)
}
