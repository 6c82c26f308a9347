//! Configuration types.
//!
//! This module defines the tracing configuration and the logging enums shared
//! by both binaries.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_DELAY_MS, DEFAULT_IDLE_CONN_TIMEOUT, DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_IDLE_CONNS,
    DEFAULT_MAX_REDIRECTS, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TLS_HANDSHAKE_TIMEOUT,
    DEFAULT_USER_AGENT,
};
use crate::error_handling::TraceError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Limits and timeouts for redirect tracing (no CLI dependencies).
///
/// Any field left at zero (or empty, for the user agent) is replaced by its
/// documented default in [`TraceConfig::with_defaults`], which
/// [`Requester::new`](crate::Requester::new) always applies. A fully zeroed
/// struct is therefore a valid way to ask for "all defaults".
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use unfurl::TraceConfig;
///
/// let config = TraceConfig {
///     max_redirects: 5,
///     request_timeout: Duration::from_secs(3),
///     ..TraceConfig::zeroed()
/// }
/// .with_defaults();
///
/// assert_eq!(config.max_redirects, 5);
/// assert_eq!(config.max_body_size, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    /// Pause before every fetch after the first, in milliseconds
    pub delay_ms: u64,

    /// Byte ceiling on the body retained per hop
    pub max_body_size: usize,

    /// Upper bound on fetch attempts per trace
    pub max_redirects: usize,

    /// User-Agent header value sent on every request
    pub user_agent: String,

    /// Deadline for a single fetch (connect, headers and body)
    pub request_timeout: Duration,

    /// Idle connection ceiling of the shared pool
    pub max_idle_conns: usize,

    /// Pool eviction age for idle connections
    pub idle_conn_timeout: Duration,

    /// Cap on connection establishment including TLS negotiation
    pub tls_handshake_timeout: Duration,
}

impl TraceConfig {
    /// A configuration with every field unset.
    pub fn zeroed() -> Self {
        Self {
            delay_ms: 0,
            max_body_size: 0,
            max_redirects: 0,
            user_agent: String::new(),
            request_timeout: Duration::ZERO,
            max_idle_conns: 0,
            idle_conn_timeout: Duration::ZERO,
            tls_handshake_timeout: Duration::ZERO,
        }
    }

    /// Replaces every zero-valued field with its default.
    pub fn with_defaults(mut self) -> Self {
        if self.delay_ms == 0 {
            self.delay_ms = DEFAULT_DELAY_MS;
        }
        if self.max_body_size == 0 {
            self.max_body_size = DEFAULT_MAX_BODY_SIZE;
        }
        if self.max_redirects == 0 {
            self.max_redirects = DEFAULT_MAX_REDIRECTS;
        }
        if self.user_agent.is_empty() {
            self.user_agent = DEFAULT_USER_AGENT.to_string();
        }
        if self.request_timeout.is_zero() {
            self.request_timeout = DEFAULT_REQUEST_TIMEOUT;
        }
        if self.max_idle_conns == 0 {
            self.max_idle_conns = DEFAULT_MAX_IDLE_CONNS;
        }
        if self.idle_conn_timeout.is_zero() {
            self.idle_conn_timeout = DEFAULT_IDLE_CONN_TIMEOUT;
        }
        if self.tls_handshake_timeout.is_zero() {
            self.tls_handshake_timeout = DEFAULT_TLS_HANDSHAKE_TIMEOUT;
        }
        self
    }

    /// Checks that the hop bound allows at least one fetch.
    ///
    /// # Errors
    ///
    /// Returns `TraceError::InvalidMaxRedirects` when `max_redirects` is zero.
    pub fn validate(&self) -> Result<(), TraceError> {
        validate_max_redirects(self.max_redirects)
    }

    /// The hop bound for a trace with an optional caller cutoff.
    ///
    /// A `depth` of zero means "no cutoff". A deeper cutoff than the configured
    /// bound never raises it.
    pub fn effective_max_redirects(&self, depth: usize) -> usize {
        if depth != 0 && depth < self.max_redirects {
            depth
        } else {
            self.max_redirects
        }
    }

    /// The inter-hop pause as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::zeroed().with_defaults()
    }
}

pub(crate) fn validate_max_redirects(max_redirects: usize) -> Result<(), TraceError> {
    if max_redirects < 1 {
        return Err(TraceError::InvalidMaxRedirects { max_redirects });
    }
    Ok(())
}
