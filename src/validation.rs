//! Configuration validation.
//!
//! Provides validation for the service base URL and request timeout.
//! Star names are deliberately passed through untouched.

use crate::constants::*;
use crate::{Result, StarSearchError};
use url::Url;

/// Validator for user supplied configuration
pub struct InputValidator;

impl InputValidator {
    /// Validates the service base URL and parses it
    pub fn validate_base_url(raw: &str) -> Result<Url> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StarSearchError::invalid_base_url(
                raw,
                "Base URL cannot be empty or whitespace-only",
            ));
        }

        if trimmed.len() > MAX_BASE_URL_LENGTH {
            return Err(StarSearchError::invalid_base_url(
                raw,
                &format!(
                    "Base URL cannot be longer than {} characters",
                    MAX_BASE_URL_LENGTH
                ),
            ));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| StarSearchError::invalid_base_url(raw, &e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(StarSearchError::invalid_base_url(
                raw,
                &format!("Unsupported scheme '{}', expected http or https", url.scheme()),
            ));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(StarSearchError::invalid_base_url(raw, "Base URL has no host"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(StarSearchError::invalid_base_url(
                raw,
                "Base URL cannot carry a query string or fragment",
            ));
        }

        Ok(url)
    }

    /// Validates the request timeout in seconds
    pub fn validate_timeout(secs: u64) -> Result<u64> {
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(StarSearchError::InvalidArguments(format!(
                "Timeout must be between 1 and {} seconds, got {}",
                MAX_TIMEOUT_SECS, secs
            )));
        }
        Ok(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert!(InputValidator::validate_base_url("https://stellarium.onrender.com").is_ok());
        assert!(InputValidator::validate_base_url("http://127.0.0.1:8080").is_ok());
        assert!(InputValidator::validate_base_url("  https://example.com/prefix  ").is_ok());

        let url = InputValidator::validate_base_url("http://localhost:3000/v1").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(3000));
        assert_eq!(url.path(), "/v1");
    }

    #[test]
    fn test_validate_base_url_invalid() {
        // Empty
        assert!(InputValidator::validate_base_url("").is_err());
        assert!(InputValidator::validate_base_url("   ").is_err());

        // Not absolute
        assert!(InputValidator::validate_base_url("stellarium.onrender.com").is_err());
        assert!(InputValidator::validate_base_url("/api/star").is_err());

        // Wrong scheme
        assert!(InputValidator::validate_base_url("ftp://example.com").is_err());
        assert!(InputValidator::validate_base_url("file:///tmp/stars").is_err());

        // Query or fragment
        assert!(InputValidator::validate_base_url("https://example.com?name=x").is_err());
        assert!(InputValidator::validate_base_url("https://example.com#top").is_err());

        // Too long
        let long_url = format!("https://{}.com", "a".repeat(MAX_BASE_URL_LENGTH));
        assert!(InputValidator::validate_base_url(&long_url).is_err());
    }

    #[test]
    fn test_validate_timeout() {
        assert_eq!(InputValidator::validate_timeout(1).unwrap(), 1);
        assert_eq!(
            InputValidator::validate_timeout(DEFAULT_TIMEOUT_SECS).unwrap(),
            DEFAULT_TIMEOUT_SECS
        );
        assert_eq!(
            InputValidator::validate_timeout(MAX_TIMEOUT_SECS).unwrap(),
            MAX_TIMEOUT_SECS
        );
        assert!(InputValidator::validate_timeout(0).is_err());
        assert!(InputValidator::validate_timeout(MAX_TIMEOUT_SECS + 1).is_err());
    }
}
