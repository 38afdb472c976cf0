//! Fetch worker thread
//!
//! Runs data-source lookups in a background thread so the UI never blocks
//! on the network. Receives requests via channel and sends back responses
//! tagged with the originating request id; the state machine on the main
//! thread decides whether a response is still current.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::source::BookSource;

use super::search_state::{FetchRequest, FetchResponse};

/// Spawn the fetch worker thread.
///
/// The thread exits when the request sender is dropped. Requests that piled
/// up while a fetch was running are coalesced to the newest one before the
/// next lookup; the skipped ones could only produce stale responses.
pub fn spawn_worker<S>(
    source: S,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) where
    S: BookSource + Send + 'static,
{
    std::thread::spawn(move || {
        worker_loop(&source, &request_rx, &response_tx);
    });
}

fn worker_loop<S: BookSource>(
    source: &S,
    request_rx: &Receiver<FetchRequest>,
    response_tx: &Sender<FetchResponse>,
) {
    while let Ok(mut request) = request_rx.recv() {
        // Drain the queue down to the most recent request
        loop {
            match request_rx.try_recv() {
                Ok(newer) => request = newer,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        let FetchRequest::Search {
            query,
            limit,
            request_id,
        } = request;

        log::debug!("Fetching \"{}\" (request {})", query, request_id);
        let response = match source.search(&query, limit) {
            Ok(books) => FetchResponse::Results { books, request_id },
            Err(e) => FetchResponse::Failed {
                message: e.to_string(),
                request_id,
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("Fetch worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
