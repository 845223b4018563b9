// src/logging.rs
//! Logger setup. The terminal belongs to the UI, so records go to a file.

use std::{
    fs::{self, OpenOptions},
    path::Path,
};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install `env_logger` writing to `file`. `RUST_LOG` overrides `level`.
pub fn init(level: &str, file: &Path) -> Result<()> {
    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .with_context(|| format!("opening log file {}", file.display()))?;

    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(sink)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;
    Ok(())
}
