//! Logging init: append to a file under the XDG state dir, or stderr when that
//! is not possible.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,shareclean_core=debug,shareclean=debug";
const LOG_FILE: &str = "shareclean.log";

/// Every event writes through a shared handle; `&File` is `Write`.
struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = &'a File;

    fn make_writer(&'a self) -> Self::Writer {
        &self.0
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/shareclean`.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shareclean")?;
    Ok(xdg_dirs.get_state_home())
}

fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;
    Ok((path, file))
}

/// Initialize structured logging to `~/.local/state/shareclean/shareclean.log`.
/// On failure the caller should fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    init_logging_in(&log_dir()?)
}

/// Like [`init_logging`] with an explicit directory. Fails if the file cannot
/// be opened or a global subscriber is already installed.
pub fn init_logging_in(dir: &Path) -> Result<PathBuf> {
    let (path, file) = open_log_file(dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(LogFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("shareclean logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only. A no-op if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
