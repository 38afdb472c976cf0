/// Placeholder shown when the data source has no publication year
pub const UNKNOWN_YEAR: &str = "—";

/// Placeholder shown when the data source has no author
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A single search result from the book data source.
///
/// Immutable once produced; the search state replaces its whole result
/// vector on every successful fetch, never merging into an old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Opaque unique identifier (e.g. an Open Library work key)
    pub id: String,
    pub title: String,
    pub author: String,
    /// Publication year as text, or [`UNKNOWN_YEAR`]
    pub year: String,
    /// Cover image URL, when the source has one
    pub cover_url: Option<String>,
}

impl Book {
    /// One-line display label: "Title — Author (Year)"
    pub fn label(&self) -> String {
        format!("{} — {} ({})", self.title, self.author, self.year)
    }
}
