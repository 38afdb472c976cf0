//! Book data sources
//!
//! The search worker talks to a [`BookSource`]; the shipped implementation
//! queries the Open Library search API.

mod open_library;

pub use open_library::OpenLibrarySource;

use thiserror::Error;

use crate::book::Book;

/// Errors from a book data source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search service returned HTTP {code}")]
    Api { code: u16 },

    #[error("Malformed search response: {0}")]
    Parse(String),
}

/// A remote source of book records.
///
/// Contract: `search` is never invoked with an empty or whitespace-only
/// query; the state machine short-circuits those before dispatch.
pub trait BookSource {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Book>, SourceError>;
}
