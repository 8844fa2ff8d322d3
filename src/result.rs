//! Search result types.

use serde::{Deserialize, Serialize};

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    #[serde(default)]
    pub title: String,
    /// Result URL.
    #[serde(default)]
    pub url: String,
    /// Result description/snippet.
    #[serde(default)]
    pub description: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(title: impl Into<String>, url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Decoded body of a `/search?format=json` call.
///
/// Results keep the order in which the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Creates a response from an ordered list of results.
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    /// Returns the results.
    pub fn items(&self) -> &[SearchResult] {
        &self.results
    }

    /// Iterates over the results in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchResponse {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
