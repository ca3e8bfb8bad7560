//! Fetch dispatch off the UI thread.
//!
//! Each search runs as its own task on a small tokio runtime. Outcomes come
//! back over a std channel so the UI loop can drain them between frames
//! without ever awaiting.

use super::{FetchOutcome, SearchRequest, StarDataService};
use crate::constants::RUNTIME_WORKER_THREADS;
use crate::{Result, StarSearchError};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

pub struct FetchDispatcher {
    /// Only taken on drop
    runtime: Option<Runtime>,
    service: Arc<dyn StarDataService>,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
}

impl FetchDispatcher {
    /// Start the runtime that will execute lookups against `service`
    pub fn new(service: Arc<dyn StarDataService>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(RUNTIME_WORKER_THREADS)
            .thread_name("star-fetch")
            .enable_all()
            .build()
            .map_err(|e| StarSearchError::RuntimeError(format!("Failed to start runtime: {}", e)))?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime: Some(runtime),
            service,
            sender,
            receiver,
        })
    }

    /// Spawn the lookup for `request`. Superseded requests are never cancelled.
    pub fn dispatch(&self, request: SearchRequest) {
        crate::logging::debug_log(&format!(
            "Dispatching search #{} for {:?}",
            request.seq, request.query
        ));

        let runtime = match &self.runtime {
            Some(runtime) => runtime,
            None => return,
        };

        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        runtime.spawn(async move {
            let result = service.fetch_star(&request.query).await;
            // The receiver only disappears when the app is shutting down
            if sender.send(FetchOutcome::new(request, result)).is_err() {
                crate::logging::trace_log("Dropping fetch outcome, receiver is gone");
            }
        });
    }

    /// Next finished lookup, if any, without blocking
    pub fn try_next(&self) -> Option<FetchOutcome> {
        self.receiver.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished lookup
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for FetchDispatcher {
    fn drop(&mut self) {
        // A lookup stuck in blocking DNS resolution must not hold up quitting
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl std::fmt::Debug for FetchDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchDispatcher")
            .field("service", &"dyn StarDataService")
            .finish()
    }
}
