//! Command-line options for the `unfurl` and `unfurld` binaries.
//!
//! Both binaries share [`TraceArgs`]; each wraps it with its own extra flags.
//! The parsed options convert into a [`TraceConfig`] so the library never
//! depends on clap types.

use std::time::Duration;

use clap::{Args, Parser};

use crate::app::version::default_user_agent;
use crate::config::constants::{
    CLI_DEFAULT_DELAY_MS, DEFAULT_DELAY_MS, DEFAULT_IDLE_CONN_TIMEOUT, DEFAULT_MAX_BODY_SIZE,
    DEFAULT_MAX_IDLE_CONNS, DEFAULT_MAX_REDIRECTS, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_TLS_HANDSHAKE_TIMEOUT, SERVER_DEFAULT_BIND, SERVER_DEFAULT_PORT,
};
use crate::config::types::{LogFormat, LogLevel, TraceConfig};

/// Tracing flags shared by both binaries.
#[derive(Debug, Clone, Args)]
pub struct TraceArgs {
    /// Maximum body size in bytes captured per hop
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_SIZE)]
    pub max_body_size: usize,

    /// Maximum number of redirects (fetch attempts) per trace
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Custom User-Agent string (default includes version and build info)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Timeout for each request in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub request_timeout_secs: u64,

    /// Maximum number of idle connections
    #[arg(long, default_value_t = DEFAULT_MAX_IDLE_CONNS)]
    pub max_idle_conns: usize,

    /// Timeout for idle connections in seconds
    #[arg(long, default_value_t = DEFAULT_IDLE_CONN_TIMEOUT.as_secs())]
    pub idle_conn_timeout_secs: u64,

    /// Timeout for the TLS handshake in seconds
    #[arg(long, default_value_t = DEFAULT_TLS_HANDSHAKE_TIMEOUT.as_secs())]
    pub tls_handshake_timeout_secs: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl TraceArgs {
    /// Builds the library configuration.
    ///
    /// `delay_ms` comes from the owning binary since the defaults differ, and
    /// `product` names the default User-Agent (`unfurl/0.1.0`).
    pub fn to_trace_config(&self, delay_ms: u64, product: &str) -> TraceConfig {
        TraceConfig {
            delay_ms,
            max_body_size: self.max_body_size,
            max_redirects: self.max_redirects,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| default_user_agent(product)),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_idle_conns: self.max_idle_conns,
            idle_conn_timeout: Duration::from_secs(self.idle_conn_timeout_secs),
            tls_handshake_timeout: Duration::from_secs(self.tls_handshake_timeout_secs),
        }
        .with_defaults()
    }
}

/// Options of the `unfurl` command.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "unfurl",
    about = "Follow every redirect of a URL and print the chain",
    after_help = "EXAMPLES\n   unfurl --depth 1 'https://tinyurl.com/2u7bcuny'",
    disable_version_flag = true
)]
pub struct UnfurlCli {
    /// URL to resolve (http:// or https://)
    pub url: Option<String>,

    /// Print version and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = CLI_DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Gives back the result at depth N (0 prints the whole chain)
    #[arg(long, default_value_t = 0)]
    pub depth: usize,

    /// Show full results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub trace: TraceArgs,
}

impl UnfurlCli {
    /// Library configuration for the command.
    ///
    /// The `--depth` cutoff is not folded in here; it is applied per trace.
    pub fn to_trace_config(&self) -> TraceConfig {
        self.trace.to_trace_config(self.delay_ms, "unfurl")
    }
}

/// Options of the `unfurld` service.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "unfurld",
    about = "Serve redirect chains as JSON over HTTP",
    disable_version_flag = true
)]
pub struct UnfurldCli {
    /// Print version and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Port to listen on (overridden by the PORT environment variable)
    #[arg(long, default_value_t = SERVER_DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to (overridden by the BIND environment variable)
    #[arg(long, default_value = SERVER_DEFAULT_BIND)]
    pub bind: String,

    #[command(flatten)]
    pub trace: TraceArgs,
}

impl UnfurldCli {
    /// Library configuration for the service.
    pub fn to_trace_config(&self) -> TraceConfig {
        self.trace.to_trace_config(self.delay_ms, "RedirectFollower")
    }

    /// Applies the `PORT` and `BIND` environment overrides.
    ///
    /// `PORT` must be a positive integer; anything else is logged and ignored.
    pub fn apply_env_overrides(&mut self, port: Option<String>, bind: Option<String>) {
        if let Some(raw) = port.filter(|p| !p.is_empty()) {
            match raw.parse::<u16>() {
                Ok(p) if p > 0 => self.port = p,
                _ => log::warn!(
                    "Invalid PORT environment variable value: {}, using default or flag value",
                    raw
                ),
            }
        }
        if let Some(bind) = bind.filter(|b| !b.is_empty()) {
            self.bind = bind;
        }
    }

    /// The `bind:port` address to listen on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
