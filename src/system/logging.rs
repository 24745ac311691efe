//! Logging system initialization
//!
//! Sets up the tracing/logging system based on application configuration.

use tracing_appender::rolling;

use crate::config::AppConfig;

const DEFAULT_LOG_NAME: &str = "reflinker.log";

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// Returns a `WorkerGuard` that must be kept alive for the duration of the
/// program so non-blocking log writes are flushed.
///
/// # Panics
/// * If creating the log appender fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let log_file = config
        .logging
        .file
        .as_deref()
        .filter(|f| !f.is_empty());

    let writer = match log_file {
        Some(path) if config.logging.enable_rotation => rolling_writer(path, config),
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .expect("Failed to open log file");
            Box::new(file) as Box<dyn std::io::Write + Send + Sync>
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}

fn rolling_writer(path: &str, config: &AppConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let dir = std::path::Path::new(path)
        .parent()
        .unwrap_or(std::path::Path::new("."));
    let filename = std::path::Path::new(path)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(DEFAULT_LOG_NAME);
    let appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix(filename.trim_end_matches(".log"))
        .filename_suffix("log")
        .max_log_files(config.logging.max_backups as usize)
        .build(dir)
        .expect("Failed to create rolling log appender");
    Box::new(appender)
}
