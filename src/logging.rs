use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::LoggingError;

/// Keeps the file writer's worker thread alive; drop it to flush pending lines
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Builds the level filter, falling back to `info` for unparsable directives
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber
///
/// Logs always go to stderr so command output on stdout stays clean. When
/// `log_file` is given, every line is also appended to that file without
/// ANSI colours. Hold the returned guard until the program exits.
pub fn init_logging(
    level: &str,
    log_file: Option<&Path>,
) -> Result<Option<LogGuard>, LoggingError> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let Some(log_file) = log_file else {
        tracing_subscriber::registry()
            .with(env_filter(level))
            .with(stderr_layer)
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialised)?;
        return Ok(None);
    };

    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory).map_err(|source| LoggingError::LogFile {
        path: log_file.to_path_buf(),
        source,
    })?;
    let file_name = log_file.file_name().ok_or_else(|| LoggingError::LogFile {
        path: log_file.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "log file has no file name"),
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialised)?;

    Ok(Some(LogGuard { _guard: guard }))
}
