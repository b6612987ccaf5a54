//! File-backed tracing setup. The terminal belongs to the UI, so log output
//! only ever goes to disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "REEL_LOG";

/// Keeps the background log writer alive; drop it last.
pub struct LogGuard(#[allow(dead_code)] Option<WorkerGuard>);

/// Default log directory: the platform data directory, else the temp dir.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "reel")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("reel-logs"))
}

pub fn init(log_dir: &Path) -> LogGuard {
    let log_dir = match fs::create_dir_all(log_dir) {
        Ok(()) => log_dir.to_path_buf(),
        Err(_) => std::env::temp_dir().join("reel-logs"),
    };
    let _ = fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, "reel.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
    tracing::info!(log_dir = %log_dir.display(), "logging initialized");

    LogGuard(Some(guard))
}
