//! unfurl library: redirect chain tracing
//!
//! Follows every redirect of a URL, both HTTP status redirects (3xx with a
//! `Location` header) and HTML `<meta http-equiv="refresh">` tags, and returns
//! the whole chain with each hop's headers and a capped body.
//!
//! The returned chain is ordered latest first: index 0 is the last response
//! fetched, the last index is the URL you passed in.
//!
//! # Example
//!
//! ```no_run
//! use unfurl::{Requester, TraceConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let requester = Requester::new(TraceConfig {
//!     max_redirects: 5,
//!     ..TraceConfig::default()
//! })?;
//!
//! let chain = requester.follow_redirects("https://tinyurl.com/2u7bcuny").await?;
//! if let Some(latest) = chain.latest() {
//!     println!("resolved to {}", latest.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
mod chain;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod server;

// Re-export public API
pub use chain::{Hop, RedirectChain};
pub use config::{LogFormat, LogLevel, TraceConfig};
pub use error_handling::{categorize_reqwest_error, FetchErrorKind, InitializationError, TraceError};
pub use fetch::{extract_meta_refresh, trace, RedirectSignal, Requester};
