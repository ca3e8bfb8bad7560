//! Runtime configuration assembled from the command line.

use crate::panel::ResponseOrdering;
use crate::render::ContentPolicy;
use crate::star::StarEndpoint;
use std::time::Duration;

/// Everything the application needs to start, already validated
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where star lookups are sent
    pub endpoint: StarEndpoint,
    /// Per-request timeout
    pub timeout: Duration,
    /// Trust decision for fetched markup
    pub content_policy: ContentPolicy,
    /// Which responses may update the panel
    pub ordering: ResponseOrdering,
    /// Pre-filled query, not searched until the user asks
    pub initial_query: Option<String>,
    pub debug: bool,
}
