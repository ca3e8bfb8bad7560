//! Search panel state machine
//!
//! Owns the query, the fetched markup and the error message. Issuing a search
//! and applying its outcome are separate steps so the network call can run
//! elsewhere while the UI keeps accepting input.

use crate::constants::FETCH_ERROR_MESSAGE;
use crate::star::{FetchOutcome, SearchRequest};

/// Which responses are allowed to update the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Whatever arrives last wins, regardless of which query it answered
    #[default]
    LastArrival,
    /// Only the response to the most recently issued search is applied
    LatestIssued,
}

/// What the panel currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    /// Input visible, nothing to report
    Idle,
    /// Input visible, at least one lookup is in flight
    Searching,
    /// Result shown, input hidden
    Success,
    /// Input visible with the error message underneath
    Failure,
}

#[derive(Debug, Clone)]
pub struct SearchPanel {
    query: String,
    result: Option<String>,
    error: Option<String>,
    ordering: ResponseOrdering,
    /// Sequence number of the most recently issued search, 0 before the first
    last_issued: u64,
    in_flight: usize,
}

impl SearchPanel {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            query: String::new(),
            result: None,
            error: None,
            ordering,
            last_issued: 0,
            in_flight: 0,
        }
    }

    /// Replace the query. Never issues a lookup.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Append a typed character to the query
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character of the query
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Issue a lookup for the current query, sent exactly as typed
    pub fn search(&mut self) -> SearchRequest {
        self.last_issued += 1;
        self.in_flight += 1;
        crate::logging::info_log(&format!(
            "Issuing search #{} for {:?}",
            self.last_issued, self.query
        ));
        SearchRequest {
            seq: self.last_issued,
            query: self.query.clone(),
        }
    }

    /// Apply a finished lookup. Returns false when the outcome was discarded as stale.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.ordering == ResponseOrdering::LatestIssued && outcome.seq != self.last_issued {
            crate::logging::debug_log(&format!(
                "Discarding stale response #{} for {:?}, latest is #{}",
                outcome.seq, outcome.query, self.last_issued
            ));
            return false;
        }

        match outcome.result {
            Ok(body) => {
                crate::logging::info_log(&format!(
                    "Search #{} for {:?} succeeded",
                    outcome.seq, outcome.query
                ));
                self.result = Some(body);
                self.error = None;
            }
            Err(err) => {
                crate::logging::warn_log(&format!(
                    "Search #{} for {:?} failed: {}",
                    outcome.seq, outcome.query, err
                ));
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.result = None;
            }
        }
        true
    }

    /// Clear result, query and any lingering error; back to the input view
    pub fn reset(&mut self) {
        crate::logging::debug_log("Resetting search panel");
        self.result = None;
        self.query.clear();
        self.error = None;
    }

    /// An empty body counts as a result but is shown like no result at all
    pub fn view(&self) -> PanelView {
        if !self.input_visible() {
            PanelView::Success
        } else if self.in_flight > 0 {
            PanelView::Searching
        } else if self.error.is_some() {
            PanelView::Failure
        } else {
            PanelView::Idle
        }
    }

    /// The input line is shown whenever the result is absent or empty
    pub fn input_visible(&self) -> bool {
        self.result.as_deref().map_or(true, str::is_empty)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self::new(ResponseOrdering::default())
    }
}
