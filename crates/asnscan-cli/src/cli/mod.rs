//! CLI argument parsing, logging setup and session bootstrap.

pub mod args;
pub mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use args::Cli;
use asnscan::{BgpViewClientBuilder, ReverseScanner, SystemResolver};
use clap::Parser;
use tracing::debug;

use crate::config::Settings;
use crate::output;
use session::{Outcome, Session};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "ASNSCAN_LOG";

/// Run the CLI application.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::from(&cli);

    if settings.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = init_tracing(settings.verbose) {
        eprintln!("{e:#}");
    }

    match execute(&settings).await {
        Ok(outcome) => {
            debug!(?outcome, "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(io::stdout(), &err);
            ExitCode::FAILURE
        }
    }
}

async fn execute(settings: &Settings) -> Result<Outcome> {
    let client = BgpViewClientBuilder::with_config(settings.client.clone())
        .build()
        .context("failed to set up the BGP API client")?;

    let scanner = ReverseScanner::with_delay(SystemResolver::system_or_default(), settings.lookup_delay);

    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = Session::new(&client, &scanner, stdin.lock(), stdout.lock())
        .warmup(settings.warmup)
        .run()
        .await?;

    Ok(outcome)
}

/// Print a fatal error. A closed or broken stdout is ignored.
fn report_failure(mut out: impl Write, err: &anyhow::Error) {
    let _ = writeln!(out, "{}", output::failure(err));
    let _ = out.flush();
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
