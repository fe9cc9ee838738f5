//! Logging initialization for kickstart.
//!
//! TUI mode: logs to `<logs dir>/kickstart-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Guard that must be kept alive for the duration of the program.
    /// When dropped, ensures all buffered logs are flushed.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Log file name for a run started at `timestamp`
pub fn log_file_name(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    format!("kickstart-{}.log", timestamp.format("%Y%m%dT%H%M%SZ"))
}

/// Filter directive: `--debug` beats the configured level, `RUST_LOG` beats both
fn filter_directive(config: &Config, debug_override: bool) -> String {
    let log_level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    std::env::var("RUST_LOG").unwrap_or(log_level)
}

/// Initialize logging based on mode and configuration.
///
/// Returns a `LoggingHandle` that must be kept alive for the duration of the program.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(filter_directive(config, debug_override));

    if is_tui_mode && config.logging.to_file {
        // Anything written to stderr would corrupt the alternate screen
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let (non_blocking, guard) = file_writer(&logs_dir, &log_filename);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

fn file_writer(
    dir: &Path,
    file_name: &str,
) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    tracing_appender::non_blocking(file_appender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_name_format() {
        let ts = chrono::Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(log_file_name(ts), "kickstart-20260304T050607Z.log");
    }

    #[test]
    fn test_debug_override_sets_debug_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = Config::default();
        assert_eq!(filter_directive(&config, true), "debug");
        assert_eq!(filter_directive(&config, false), "info");
    }

    #[test]
    fn test_file_writer_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let (writer, guard) = file_writer(temp_dir.path(), "kickstart-test.log");
        drop(writer);
        drop(guard);
        assert!(temp_dir.path().join("kickstart-test.log").exists());
    }

    #[test]
    fn test_configured_level_used_without_debug() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let mut config = Config::default();
        config.logging.level = "warn".to_string();
        assert_eq!(filter_directive(&config, false), "warn");
        assert_eq!(filter_directive(&config, true), "debug");
    }
}
