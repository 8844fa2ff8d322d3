//! Search query acquisition.

use std::io::BufRead;

use crate::{Result, SearchError};

/// Reads one line from `reader` and returns it trimmed.
///
/// Only the first line is consumed. Immediate EOF or a blank line yields
/// [`SearchError::EmptyQuery`]; a last line without a trailing newline is
/// accepted as is.
pub fn read_query<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(SearchError::Input)?;

    let query = line.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    Ok(query.to_string())
}
