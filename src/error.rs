//! Error types for the search client.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while configuring, querying or decoding.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Instance URL is not an absolute http(s) URL.
    #[error("invalid instance URL '{0}': {1}")]
    InvalidUrl(String, String),

    /// Output format outside of `json` / `text`.
    #[error("invalid format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    /// Any other configuration problem.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Nothing left of the query after trimming.
    #[error("search query cannot be empty")]
    EmptyQuery,

    /// Reading standard input failed.
    #[error("failed to read input: {0}")]
    Input(std::io::Error),

    /// Writing the rendered output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("failed to perform request: {0}")]
    Http(reqwest::Error),

    /// Request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Server answered with something other than 200 OK.
    #[error("unexpected status code {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body is not a valid search response.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
