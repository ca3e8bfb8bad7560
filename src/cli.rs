//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap and turns it into an `AppConfig`
//!

use crate::config::AppConfig;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::panel::ResponseOrdering;
use crate::render::ContentPolicy;
use crate::star::StarEndpoint;
use crate::validation::InputValidator;
use crate::Result;
use clap::Parser;
use std::time::Duration;

/// Star Search - look up stars by name from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "star-search",
    about = "Star Search - a TUI that looks up stars by name on a remote astronomical data API",
    long_about = "Star Search - Rust based TUI that queries a star data service and shows the returned markup

    EXAMPLES:
        star-search
        star-search Sirius # Pre-fill the search box
        star-search --base-url http://localhost:8080 # Use another service
        star-search --content trust # Show markup exactly as returned
        star-search --latest-only # Ignore responses to superseded searches

    USAGE TIP:
        Type a star name and press Enter. Backspace or b goes back from a result, t toggles markup/text
    "
)]
#[command(version)]
pub struct Cli {
    /// Star name to pre-fill
    #[arg(help = "Star name to pre-fill in the search box (not searched until Enter)")]
    pub query: Option<String>,

    /// Service base URL
    #[arg(
        short,
        long,
        env = "STAR_SEARCH_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the star data service"
    )]
    pub base_url: String,

    /// Trust decision for fetched markup
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = ContentPolicy::Sanitize,
        help = "How fetched markup is treated: sanitize (default) or trust. \
                trust shows the service's markup unmodified, including scripts and event handlers"
    )]
    pub content: ContentPolicy,

    /// Stale response guard
    #[arg(
        short,
        long,
        help = "Only apply the response to the most recent search (default: last response to arrive wins)"
    )]
    pub latest_only: bool,

    /// Request timeout
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments and build the runtime configuration
    pub fn to_config(&self) -> Result<AppConfig> {
        let base = InputValidator::validate_base_url(&self.base_url)?;
        let timeout = InputValidator::validate_timeout(self.timeout)?;

        Ok(AppConfig {
            endpoint: StarEndpoint::from_base(base)?,
            timeout: Duration::from_secs(timeout),
            content_policy: self.content,
            ordering: self.response_ordering(),
            initial_query: self.query.clone(),
            debug: self.debug,
        })
    }

    /// Get the response ordering
    pub fn response_ordering(&self) -> ResponseOrdering {
        if self.latest_only {
            ResponseOrdering::LatestIssued
        } else {
            ResponseOrdering::LastArrival
        }
    }
}
