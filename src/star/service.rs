//! HTTP implementation of the star data service.

use super::{StarDataService, StarEndpoint};
use crate::{Result, StarSearchError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Star data service reached over HTTP with a single GET per lookup
#[derive(Debug, Clone)]
pub struct HttpStarService {
    client: Client,
    endpoint: StarEndpoint,
}

impl HttpStarService {
    /// Create a service for `endpoint` whose requests give up after `timeout`
    pub fn new(endpoint: StarEndpoint, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StarSearchError::RuntimeError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &StarEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl StarDataService for HttpStarService {
    async fn fetch_star(&self, name: &str) -> Result<String> {
        let url = self.endpoint.star_url(name);
        crate::logging::info_log(&format!("GET {}", url));

        // Non-2xx statuses become errors; the From impl folds every reqwest failure into FetchFailed
        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status();
        let body = response.text().await?;

        crate::logging::debug_log(&format!(
            "Star lookup for {:?} returned {} ({} bytes)",
            name,
            status,
            body.len()
        ));
        Ok(body)
    }
}
