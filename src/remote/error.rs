//! Download error types

use thiserror::Error;

/// Errors that can occur when fetching a file from the remote endpoint
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
