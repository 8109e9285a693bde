//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to
//! `<data_dir>/disctask/disctask.log` instead of stdout. Level defaults to
//! INFO and can be overridden with `RUST_LOG`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors from logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An I/O error occurred while creating the log directory or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}

/// Initializes logging into the default per-user data directory.
///
/// Returns the log file path. Calling this more than once is harmless: the
/// first subscriber wins and later calls only reopen the file.
pub fn init() -> Result<PathBuf, LoggingError> {
    let data_dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    init_at(&data_dir.join("disctask"))
}

/// Initializes logging with the log file placed under `dir`.
pub fn init_at(dir: &Path) -> Result<PathBuf, LoggingError> {
    fs::create_dir_all(dir)?;
    let path = dir.join("disctask.log");
    let file = File::options().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init fails if a subscriber is already installed; that's fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}
