//! Output rendering.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::{Result, SearchError, SearchResponse};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable text output
    Text,
}

impl FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(SearchError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Writes `response` to `out` in the requested format.
pub fn render<W: Write>(response: &SearchResponse, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(response, out),
        OutputFormat::Text => render_text(response, out),
    }
}

fn render_json<W: Write>(response: &SearchResponse, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, response).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn render_text<W: Write>(response: &SearchResponse, out: &mut W) -> Result<()> {
    if response.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    for (i, result) in response.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}. {}", i + 1, result.title)?;
        writeln!(out, "   {}", result.url)?;
        if !result.description.is_empty() {
            writeln!(out, "   {}", result.description)?;
        }
    }

    Ok(())
}
