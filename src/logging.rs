//! Log setup for the binary.
//!
//! The terminal belongs to the game while it runs, so records only go to a file.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Install a file logger at `info` (or whatever `RUST_LOG` says).
/// Without a path no logger is installed and log macros do nothing.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}
