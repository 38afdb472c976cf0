use thiserror::Error;

/// Custom error types for shelfseek
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("Failed to start search runtime: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
