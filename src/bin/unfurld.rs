//! `unfurld`: the redirect tracer as a JSON-over-HTTP service.
//!
//! Parses flags and the `PORT`/`BIND` environment overrides, prints the
//! effective configuration, then serves `GET /api/unfurl`.

use anyhow::{Context, Result};
use clap::Parser;

use unfurl::app::print_version;
use unfurl::config::UnfurldCli;
use unfurl::initialization::init_logger_with;
use unfurl::server::start_server;
use unfurl::{Requester, TraceConfig};

const NAME: &str = "unfurld";

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("version") {
        print_version(NAME);
        return Ok(());
    }

    let mut cli = UnfurldCli::parse();
    if cli.version {
        print_version(NAME);
        return Ok(());
    }

    init_logger_with(cli.trace.log_level.clone().into(), cli.trace.log_format.clone())
        .context("Failed to initialize logger")?;

    cli.apply_env_overrides(std::env::var("PORT").ok(), std::env::var("BIND").ok());

    let requester =
        Requester::new(cli.to_trace_config()).context("Failed to initialize HTTP client")?;
    let addr = cli.listen_addr();

    print_configuration(requester.config(), &cli, &addr);

    start_server(&addr, requester).await
}

fn print_configuration(config: &TraceConfig, cli: &UnfurldCli, addr: &str) {
    println!();
    println!("Server with configuration:");
    println!();
    println!("   {:<22} {}ms", "Delay:", config.delay_ms);
    println!("   {:<22} {} bytes", "Max Body Size:", config.max_body_size);
    println!("   {:<22} {}", "Max Redirects:", config.max_redirects);
    println!("   {:<22} {}", "User-Agent:", config.user_agent);
    println!("   {:<22} {:?}", "Request Timeout:", config.request_timeout);
    println!("   {:<22} {}", "Max Idle Conns:", config.max_idle_conns);
    println!("   {:<22} {:?}", "Idle Conn Timeout:", config.idle_conn_timeout);
    println!(
        "   {:<22} {:?}",
        "TLS Handshake Timeout:", config.tls_handshake_timeout
    );
    println!("   {:<22} {}", "Bind Address:", cli.bind);
    println!("   {:<22} {}", "Port:", cli.port);
    println!();
    println!("Example usage:");
    println!();
    println!("   curl 'http://{}/api/unfurl?url=https://example.com' |", addr);
    println!("      jq -r .result[0].url");
    println!();
}
