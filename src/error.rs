//! Error handling.
//!
//! This module provides a custom error type for the project.

use colored::*;
use std::fmt;

/// Result type alias for the star search application.
pub type Result<T> = std::result::Result<T, StarSearchError>;

/// Main error type for the star search application.
#[derive(Debug)]
pub enum StarSearchError {
    /// Invalid command line arguments.
    /// This allows you to store a more detailed message explaining why the arguments were invalid.
    InvalidArguments(String),

    /// TUI rendering error.
    TuiError(String),

    /// Terminal related error.
    TerminalError(String),

    /// File access error.
    FileAccessError { path: String, reason: String },

    /// The configured service base URL cannot be used.
    InvalidBaseUrl { url: String, reason: String },

    /// Any failure while fetching star data: transport, HTTP status or body.
    FetchFailed(String),

    /// The async runtime backing network calls could not be started.
    RuntimeError(String),
}

impl fmt::Display for StarSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg = match self {
            StarSearchError::InvalidArguments(msg) => format!("Invalid arguments: {}", msg),
            StarSearchError::TuiError(err) => format!("TUI error: {}", err),
            StarSearchError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
            StarSearchError::FileAccessError { path, reason } => {
                format!("File access error: Path: {}\n Reason: {}", path, reason)
            }
            StarSearchError::InvalidBaseUrl { url, reason } => {
                format!("Invalid base URL: {}\n reason: {}", url, reason)
            }
            StarSearchError::FetchFailed(err) => format!("Fetch failed: {}", err),
            StarSearchError::RuntimeError(err) => format!("Runtime error: {}", err),
        };
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for StarSearchError {}

impl From<reqwest::Error> for StarSearchError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if let Some(status) = err.status() {
            format!("server responded with {}", status)
        } else {
            err.to_string()
        };
        StarSearchError::FetchFailed(reason)
    }
}

impl Clone for StarSearchError {
    fn clone(&self) -> Self {
        match self {
            StarSearchError::InvalidArguments(msg) => StarSearchError::InvalidArguments(msg.clone()),
            StarSearchError::TuiError(err) => StarSearchError::TuiError(err.clone()),
            StarSearchError::TerminalError(err) => StarSearchError::TerminalError(err.clone()),
            StarSearchError::FileAccessError { path, reason } => {
                StarSearchError::FileAccessError {
                    path: path.clone(),
                    reason: reason.clone(),
                }
            }
            StarSearchError::InvalidBaseUrl { url, reason } => StarSearchError::InvalidBaseUrl {
                url: url.clone(),
                reason: reason.clone(),
            },
            StarSearchError::FetchFailed(err) => StarSearchError::FetchFailed(err.clone()),
            StarSearchError::RuntimeError(err) => StarSearchError::RuntimeError(err.clone()),
        }
    }
}

impl StarSearchError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        StarSearchError::TerminalError(err.to_string())
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        StarSearchError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid base URL error
    pub fn invalid_base_url(url: &str, reason: &str) -> Self {
        StarSearchError::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            StarSearchError::FetchFailed(..) => {
                Some("Check your network connection and try again.".to_string())
            }
            StarSearchError::InvalidBaseUrl { .. } => Some(
                "Pass an absolute http(s) URL via --base-url or STAR_SEARCH_BASE_URL.".to_string(),
            ),
            StarSearchError::FileAccessError { .. } => {
                Some("Check file permissions and try again.".to_string())
            }
            _ => None,
        }
    }
}
