//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "slidepage.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/slidepage/logs/` so they never
/// interfere with the terminal UI. Log level is controlled by the
/// `SLIDEPAGE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SLIDEPAGE_LOG=debug slidepage talk.md
/// SLIDEPAGE_LOG=slidepage_app=trace slidepage talk.md
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("SLIDEPAGE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("slidepage=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
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
        )
        .init();

    tracing::info!(
        "──── slidepage {} ({} {}) ────",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );
    tracing::info!("Log files: {}.<date>", log_file_prefix(&log_dir).display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("slidepage").join("logs"))
}

/// Daily files are named `<prefix>.YYYY-MM-DD`
fn log_file_prefix(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}
