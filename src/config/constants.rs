//! Configuration constants.
//!
//! Defaults applied by [`TraceConfig::with_defaults`](super::TraceConfig::with_defaults)
//! whenever a field is left at zero, plus the defaults used by the binaries.

use std::time::Duration;

/// Pause inserted before every fetch after the first, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 150;

/// Byte ceiling on the body captured for each hop
pub const DEFAULT_MAX_BODY_SIZE: usize = 4096;

/// Upper bound on fetch attempts per trace
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// User-Agent sent when the caller does not provide one
pub const DEFAULT_USER_AGENT: &str = "RedirectFollower/1.0 (contact: admin@example.com)";

/// Deadline for a single fetch, covering connect, headers and body
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections kept in the pool (per host, see `init_redirect_client`)
pub const DEFAULT_MAX_IDLE_CONNS: usize = 10;

/// Age after which an idle pooled connection is evicted
pub const DEFAULT_IDLE_CONN_TIMEOUT: Duration = Duration::from_secs(30);

/// Cap on connection establishment, TLS negotiation included
pub const DEFAULT_TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);

// Binary defaults
/// The CLI probes interactively, so it waits less between hops than the service
pub const CLI_DEFAULT_DELAY_MS: u64 = 10;
/// Port of `unfurld` when neither `--port` nor `PORT` is given
pub const SERVER_DEFAULT_PORT: u16 = 8080;
/// Bind address of `unfurld` when neither `--bind` nor `BIND` is given
pub const SERVER_DEFAULT_BIND: &str = "127.0.0.1";

// Request header values
/// Prefer HTML, accept plain text. Nothing else is worth capturing.
pub const ACCEPT_TEXTUAL: &str = "text/html,text/plain;q=0.9";
/// Ask the server not to keep the connection alive after the hop
pub const CONNECTION_CLOSE: &str = "close";

// Content types whose body is captured
/// Bodies of this type are also scanned for meta-refresh
pub const CONTENT_TYPE_HTML: &str = "text/html";
/// Bodies of this type are captured but never scanned
pub const CONTENT_TYPE_PLAIN: &str = "text/plain";
