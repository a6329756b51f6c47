// src/log.rs

//! Per-run session log
//!
//! One append-only file per invocation, named with the start timestamp.
//! Records flow through `tracing` and land only in the file; the console
//! stays reserved for status tags and streamed command output. The log is
//! written, never read back, by this program.

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Handle to the session log file for this run
///
/// Constructed once at process start; owning it tells the rest of the
/// program where to point users when something goes wrong.
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Initialize the session log in the current directory
    pub fn init() -> Result<Self> {
        Self::init_in(Path::new("."))
    }

    /// Initialize the session log in `dir`
    ///
    /// Opens the timestamp-named file and installs it as the global
    /// `tracing` writer. Filter defaults to `info`, overridable through
    /// `RUST_LOG`.
    pub fn init_in(dir: &Path) -> Result<Self> {
        let path = dir.join(log_file_name(&Local::now()));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .try_init()
            .map_err(|e| Error::LogInit(e.to_string()))?;

        Ok(Self { path })
    }

    /// Path of this run's log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Log filename embedding the run's start timestamp
fn log_file_name(started_at: &DateTime<Local>) -> String {
    format!(
        "vscode_installer_{}.log",
        started_at.format("%Y%m%d_%H%M%S")
    )
}
