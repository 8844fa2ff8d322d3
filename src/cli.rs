//! Command line interface: flags, duration parsing and the end-to-end flow.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::client::{Client, ClientConfig, Searcher, DEFAULT_BASE_URL};
use crate::format::{render, OutputFormat};
use crate::query::read_query;

/// Query a SearXNG-compatible instance with a search read from stdin
#[derive(Debug, Parser)]
#[command(name = "seax")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Instance URL
    #[arg(short, long, env = "SEAX_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Output format (json or text)
    #[arg(short, long, env = "SEAX_FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Search timeout (e.g. 10s, 500ms, 1m30s)
    #[arg(short, long, env = "SEAX_TIMEOUT", default_value = "10s", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Client configuration described by the flags.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.url).with_timeout(self.timeout)
    }
}

/// Long flags that are also accepted with a single dash (`-url`, `-format=text`).
const SINGLE_DASH_LONG: &[&str] = &["url", "format", "timeout"];

/// Rewrites `-url`, `-format` and `-timeout` (with or without `=value`) to
/// their `--` spellings. Short flags and everything else pass through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if SINGLE_DASH_LONG.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Runs the whole flow against the process's stdin and stdout.
pub async fn execute(cli: &Cli) -> Result<()> {
    let client = Client::with_config(cli.client_config()).context("failed to configure client")?;

    let mut out = io::BufWriter::new(io::stdout());
    run(&client, cli.format, io::stdin().lock(), &mut out).await
}

/// Reads one query from `input`, searches once and renders to `out`.
///
/// Input errors are reported before `searcher` is called.
pub async fn run<S, R, W>(searcher: &S, format: OutputFormat, input: R, out: &mut W) -> Result<()>
where
    S: Searcher + ?Sized,
    R: BufRead,
    W: Write,
{
    let query = read_query(input)?;
    debug!("query: {:?}", query);

    let response = searcher.search(&query).await.context("search failed")?;

    render(&response, format, out).context("failed to render results")?;
    out.flush().context("failed to render results")?;

    Ok(())
}

const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Parses durations written as `<number><unit>` sequences, e.g. `10s`,
/// `1.5s` or `1m30s`. Units: `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`.
pub fn parse_duration(raw: &str) -> std::result::Result<Duration, String> {
    let invalid = || format!("invalid duration '{raw}'");

    let mut rest = raw.trim();
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_nanos: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        if unit.is_empty() {
            return Err(format!("missing unit in duration '{raw}'"));
        }
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(|| format!("unknown unit '{unit}' in duration '{raw}'"))?;

        let part = scale_number(number, scale).ok_or_else(invalid)?;
        total_nanos = total_nanos.checked_add(part).ok_or_else(invalid)?;
        rest = tail;
    }

    if total_nanos == 0 {
        return Err(format!("duration '{raw}' must be positive"));
    }

    let secs = u64::try_from(total_nanos / 1_000_000_000).map_err(|_| invalid())?;
    Ok(Duration::new(secs, (total_nanos % 1_000_000_000) as u32))
}

/// `number` (digits with an optional fraction) times `scale` nanoseconds.
fn scale_number(number: &str, scale: u128) -> Option<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.contains('.') {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(scale)?;

    let mut divisor: u128 = 1;
    let mut fraction_value: u128 = 0;
    for digit in fraction.bytes() {
        // Digits beyond nanosecond precision do not change the result.
        if divisor >= 1_000_000_000_000_000_000 {
            break;
        }
        fraction_value = fraction_value * 10 + u128::from(digit - b'0');
        divisor *= 10;
    }
    nanos = nanos.checked_add(fraction_value * scale / divisor)?;

    Some(nanos)
}
