//! Logging module for debug mode
//!
//! Provides logging module that writes to a temp file
//! with timestamps when --debug is specified

use log::{debug, error, info, trace, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

const LOG_FILE_NAME: &str = "star-search-debug.log";

// run once in a single thread. this prevents race conditions
static INIT: Once = Once::new();

/// Initializes logging in the OS temp directory
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    init_debug_logging_in(&std::env::temp_dir())
}

/// Creates the log file in `dir` and sets up the logger with timestamps
///
/// The global logger can only be installed once per process; later calls still
/// create and truncate the file but keep writing to the first one.
pub fn init_debug_logging_in(dir: &Path) -> crate::Result<PathBuf> {
    let log_path = dir.join(LOG_FILE_NAME);

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| {
            crate::StarSearchError::file_access_error(
                &log_path.to_string_lossy(),
                &format!("Failed to create log file: {}", e),
            )
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .filter_module("crossterm", log::LevelFilter::Warn)
            .filter_module("ratatui", log::LevelFilter::Warn)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("hyper_util", log::LevelFilter::Warn)
            .filter_module("rustls", log::LevelFilter::Warn)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

/// Log a debug message if debug mode is enabled
pub fn debug_log(msg: &str) {
    debug!("{}", msg);
}

/// Log an info message if debug mode is enabled
pub fn info_log(msg: &str) {
    info!("{}", msg);
}

/// Log a warning message if debug mode is enabled
pub fn warn_log(msg: &str) {
    warn!("{}", msg);
}

/// Log an error message if debug mode is enabled
pub fn error_log(msg: &str) {
    error!("{}", msg);
}

/// Log a trace message if debug mode is enabled
pub fn trace_log(msg: &str) {
    trace!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_debug_logging_in(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(LOG_FILE_NAME));
        assert!(path.exists());

        // Helpers must be callable whether or not this process owns the logger
        debug_log("debug");
        info_log("info");
        warn_log("warn");
        error_log("error");
        trace_log("trace");
    }

    #[test]
    fn test_init_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does").join("not").join("exist");

        let err = init_debug_logging_in(&missing).unwrap_err();
        assert!(matches!(err, crate::StarSearchError::FileAccessError { .. }));
    }
}
