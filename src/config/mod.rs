//! Application configuration and constants.
//!
//! This module provides:
//! - Default limits and timeouts
//! - The library configuration (`TraceConfig`)
//! - CLI option types and parsing for both binaries

pub mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{TraceArgs, UnfurlCli, UnfurldCli};
pub use constants::*;
pub use types::{LogFormat, LogLevel, TraceConfig};
pub(crate) use types::validate_max_redirects;
