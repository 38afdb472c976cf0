//! Open Library search client
//!
//! Queries the `search.json` endpoint and maps docs into [`Book`] records.
//! The async HTTP client is driven by a current-thread runtime owned by the
//! source, so the fetch worker can call it synchronously.

use serde_json::Value;

use crate::book::{Book, UNKNOWN_AUTHOR, UNKNOWN_YEAR};
use crate::config::SourceConfig;
use crate::error::ShelfError;

use super::{BookSource, SourceError};

/// Doc fields requested from the API; keeps response payloads small
const FIELDS: &str = "key,title,author_name,first_publish_year,cover_i";

const COVER_URL_BASE: &str = "https://covers.openlibrary.org/b/id";

pub struct OpenLibrarySource {
    endpoint: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl OpenLibrarySource {
    pub fn new(config: &SourceConfig) -> Result<Self, ShelfError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ShelfError::Runtime(e.to_string()))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("shelfseek/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShelfError::Runtime(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
            runtime,
        })
    }
}

impl BookSource for OpenLibrarySource {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Book>, SourceError> {
        let limit = limit.to_string();
        self.runtime.block_on(async {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[("q", query), ("limit", limit.as_str()), ("fields", FIELDS)])
                .send()
                .await
                .map_err(|e| SourceError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(SourceError::Api {
                    code: status.as_u16(),
                });
            }

            let body: Value = response
                .json()
                .await
                .map_err(|e| SourceError::Parse(e.to_string()))?;

            parse_search_response(&body)
        })
    }
}

/// Map a `search.json` body into book records.
///
/// Docs without a key or title are skipped; missing author/year fall back
/// to display placeholders rather than dropping the doc.
pub(crate) fn parse_search_response(body: &Value) -> Result<Vec<Book>, SourceError> {
    let docs = body
        .get("docs")
        .and_then(|d| d.as_array())
        .ok_or_else(|| SourceError::Parse("missing docs array".to_string()))?;

    Ok(docs.iter().filter_map(parse_doc).collect())
}

fn parse_doc(doc: &Value) -> Option<Book> {
    let id = doc.get("key")?.as_str()?.to_string();
    let title = doc.get("title")?.as_str()?.to_string();

    let author = doc
        .get("author_name")
        .and_then(|a| a.as_array())
        .and_then(|a| a.first())
        .and_then(|a| a.as_str())
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string();

    let year = doc
        .get("first_publish_year")
        .and_then(|y| y.as_i64())
        .map(|y| y.to_string())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string());

    let cover_url = doc
        .get("cover_i")
        .and_then(|c| c.as_i64())
        .map(|c| format!("{}/{}-M.jpg", COVER_URL_BASE, c));

    Some(Book {
        id,
        title,
        author,
        year,
        cover_url,
    })
}
