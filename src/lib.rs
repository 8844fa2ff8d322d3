//! # seax
//!
//! A small client for SearXNG-compatible search endpoints.
//!
//! The library issues a single `GET {instance}/search?q=...&format=json`
//! request per call and decodes the `{"results": [...]}` body. The `seax`
//! binary wraps it: it reads one query line from stdin and prints the results
//! as pretty JSON or as plain text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use seax::{Client, ClientConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new("http://localhost:4000")
//!         .with_timeout(Duration::from_secs(5));
//!     let client = Client::with_config(config)?;
//!
//!     let response = client.search("rust programming").await?;
//!     for result in response.items() {
//!         println!("{}: {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod format;
mod query;
mod result;

pub mod cli;

pub use client::{Client, ClientConfig, Searcher, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{Result, SearchError};
pub use format::{render, OutputFormat};
pub use query::read_query;
pub use result::{SearchResponse, SearchResult};
