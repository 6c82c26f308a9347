//! Main application entry point (`unfurl` CLI binary).
//!
//! This is a thin wrapper around the `unfurl` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use unfurl::app::{print_version, render_report, validate_scheme};
use unfurl::config::UnfurlCli;
use unfurl::initialization::init_logger_with;
use unfurl::Requester;

const NAME: &str = "unfurl";

#[tokio::main]
async fn main() -> Result<()> {
    // `unfurl version` behaves like `unfurl --version`
    if std::env::args().nth(1).as_deref() == Some("version") {
        print_version(NAME);
        return Ok(());
    }

    let cli = UnfurlCli::parse();
    if cli.version {
        print_version(NAME);
        return Ok(());
    }

    init_logger_with(cli.trace.log_level.clone().into(), cli.trace.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some(url) = cli.url.clone() else {
        eprintln!("Error: exactly one URL argument is required");
        print_version(NAME);
        eprintln!();
        eprintln!("{}", UnfurlCli::command().render_help());
        process::exit(1);
    };

    if let Err(rejection) = validate_scheme(&url) {
        eprintln!("Error: {}", rejection);
        process::exit(1);
    }

    let requester =
        Requester::new(cli.to_trace_config()).context("Failed to initialize HTTP client")?;
    let max_redirects = requester.config().max_redirects;

    let chain = match requester.follow_redirects_to_depth(&url, cli.depth).await {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("Error following redirects: {}", e);
            process::exit(1);
        }
    };

    let report = render_report(&chain, &url, cli.depth, max_redirects, cli.json)
        .context("Failed to encode results")?;
    print!("{}", report.stdout);
    if let Some(message) = &report.stderr {
        eprintln!("{}", message);
    }
    process::exit(report.exit_code());
}
