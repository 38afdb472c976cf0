// Configuration type definitions

use serde::Deserialize;

/// Debounce window before a typed query is sent to the data source
pub const DEFAULT_DELAY_MS: u64 = 400;

/// Maximum number of results requested per fetch
pub const DEFAULT_RESULT_LIMIT: usize = 8;

const DEFAULT_ENDPOINT: &str = "https://openlibrary.org/search.json";

/// Search behavior configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            delay_ms: DEFAULT_DELAY_MS,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Data source configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
