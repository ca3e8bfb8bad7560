//! Star lookup module
//!
//! Talks to the remote star data service: endpoint construction, the HTTP
//! client and the dispatcher that keeps network calls off the UI thread.

pub mod dispatcher;
pub mod endpoint;
pub mod service;

pub use dispatcher::FetchDispatcher;
pub use endpoint::StarEndpoint;
pub use service::HttpStarService;

use crate::Result;
use async_trait::async_trait;

/// External collaborator that looks up a star by name and returns markup
#[async_trait]
pub trait StarDataService: Send + Sync {
    /// Fetch the markup describing `name`. Every failure is a `FetchFailed`.
    async fn fetch_star(&self, name: &str) -> Result<String>;
}

/// A search issued by the panel, keyed by a strictly increasing sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// The resolution of a single `SearchRequest`
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub seq: u64,
    pub query: String,
    pub result: Result<String>,
}

impl FetchOutcome {
    /// Pair a request with what the service returned for it
    pub fn new(request: SearchRequest, result: Result<String>) -> Self {
        Self {
            seq: request.seq,
            query: request.query,
            result,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
