//! Search state machine
//!
//! Owns the query text, the fetch lifecycle, and the current result set.
//! Typing restarts a debounce window; when the window elapses the trimmed
//! query is handed to the fetch worker. Every submit, clear, and selection
//! bumps a generation counter, and a worker response is applied only if it
//! still carries the current generation — responses that resolve after the
//! machine moved on are discarded, never merged.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use crate::book::Book;
use crate::config::SearchConfig;

use super::debouncer::Debouncer;

/// Request messages sent to the fetch worker thread
#[derive(Debug)]
pub enum FetchRequest {
    /// Search the data source for a non-empty, trimmed query
    Search {
        query: String,
        limit: usize,
        /// Generation at dispatch time, echoed back to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the fetch worker thread
#[derive(Debug)]
pub enum FetchResponse {
    /// The data source produced an ordered result set
    Results { books: Vec<Book>, request_id: u64 },
    /// The fetch failed; `message` is shown to the user
    Failed { message: String, request_id: u64 },
}

/// Fetch lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Search state machine for one widget instance
pub struct SearchState {
    pub status: SearchStatus,
    /// Raw query text as typed (untrimmed), kept in sync with the entry line
    pub query: String,
    pub results: Vec<Book>,
    pub error: Option<String>,
    result_limit: usize,
    /// Timer slot lives outside the observable state; firing it is the only
    /// path that issues a fetch
    debouncer: Debouncer,
    /// Bumped on every submit/clear/selection; a response is applied only
    /// when its request_id still equals this value
    generation: u64,
    request_tx: Option<Sender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
}

impl SearchState {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            status: SearchStatus::Idle,
            query: String::new(),
            results: Vec::new(),
            error: None,
            result_limit: config.result_limit,
            debouncer: Debouncer::new(config.delay_ms),
            generation: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Attach the channel handles for the fetch worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Accept raw input text.
    ///
    /// Whitespace-only input clears the machine outright, bypassing the
    /// debounce. Anything else stores the raw text and restarts the window,
    /// even when the text is identical to the current query.
    pub fn submit(&mut self, raw: &str, now: Instant) {
        if raw.trim().is_empty() {
            self.clear();
            return;
        }

        self.query = raw.to_string();
        self.generation = self.generation.wrapping_add(1);
        self.debouncer.schedule(now);
    }

    /// Service the debounce timer. Returns true when a fetch was dispatched,
    /// which also empties the visible result set.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debouncer.fire(now) {
            self.dispatch_fetch();
            return true;
        }
        false
    }

    fn dispatch_fetch(&mut self) {
        self.status = SearchStatus::Loading;
        self.results.clear();
        self.error = None;

        if let Some(ref tx) = self.request_tx {
            let request = FetchRequest::Search {
                query: self.query.trim().to_string(),
                limit: self.result_limit,
                request_id: self.generation,
            };
            if tx.send(request).is_err() {
                // Worker is gone; surface it like any other fetch failure
                self.status = SearchStatus::Error;
                self.error = Some("search worker unavailable".to_string());
            }
        }
    }

    /// Drain worker responses, applying only those from the current
    /// generation. Returns true when the result set was replaced.
    pub fn poll_responses(&mut self) -> bool {
        let mut replaced = false;
        loop {
            let response = match self.response_rx {
                Some(ref rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                },
                None => break,
            };
            if self.apply_response(response) {
                replaced = true;
            }
        }
        replaced
    }

    fn apply_response(&mut self, response: FetchResponse) -> bool {
        match response {
            FetchResponse::Results { books, request_id } => {
                if request_id != self.generation {
                    log::debug!("Discarding stale results for request {}", request_id);
                    return false;
                }
                self.status = SearchStatus::Success;
                self.results = books;
                self.error = None;
                true
            }
            FetchResponse::Failed {
                message,
                request_id,
            } => {
                if request_id != self.generation {
                    log::debug!("Discarding stale error for request {}", request_id);
                    return false;
                }
                self.status = SearchStatus::Error;
                self.results.clear();
                self.error = Some(message);
                true
            }
        }
    }

    /// Unconditional reset to the initial state, valid mid-flight; any
    /// outstanding timer or fetch is invalidated.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.status = SearchStatus::Idle;
        self.query.clear();
        self.results.clear();
        self.error = None;
    }

    /// Repopulate the query display (after a selection) without scheduling
    /// a fetch. The generation bump also invalidates anything in flight.
    pub fn set_query_text(&mut self, text: &str) {
        self.debouncer.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.query = text.to_string();
    }

    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Pending debounce deadline, for event-loop poll sizing
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Current generation, for tests that inject responses by hand
    pub fn current_generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
