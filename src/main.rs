//! seax CLI - query a search instance with a line read from stdin.

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use seax::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            let message = err.to_string();
            let message = message.trim_start_matches("error: ").trim_end();
            eprintln!("Error: failed to parse flags: {message}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = setup_logging(cli.verbose) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    match cli::execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout is reserved for results.
fn setup_logging(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())?;
    } else if verbose {
        tracing::subscriber::set_global_default(builder.with_max_level(Level::DEBUG).finish())?;
    }

    Ok(())
}
