//! Error type definitions.
//!
//! This module defines the errors returned by the tracer and by start-up code,
//! plus the coarse categories used to describe fetch failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::chain::RedirectChain;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by a trace.
///
/// A fetch failure keeps the hops completed before it, already in the
/// latest-first order of a successful trace.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The hop bound does not allow a single fetch.
    #[error("max redirects must be at least 1 (got {max_redirects})")]
    InvalidMaxRedirects {
        /// The rejected bound
        max_redirects: usize,
    },

    /// The configuration could not produce a working client.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] InitializationError),

    /// A hop could not be fetched (DNS, connect, TLS, timeout, protocol, bad URL).
    #[error("request to {url} failed: {source}")]
    Fetch {
        /// URL of the hop that failed
        url: String,
        /// Hops completed before the failure
        partial: RedirectChain,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },
}

impl TraceError {
    /// Hops completed before the failure (empty for configuration errors).
    pub fn partial_chain(&self) -> Option<&RedirectChain> {
        match self {
            TraceError::Fetch { partial, .. } => Some(partial),
            TraceError::InvalidMaxRedirects { .. } | TraceError::InvalidConfig(_) => None,
        }
    }

    /// Consumes the error, returning the completed hops.
    pub fn into_partial_chain(self) -> RedirectChain {
        match self {
            TraceError::Fetch { partial, .. } => partial,
            TraceError::InvalidMaxRedirects { .. } | TraceError::InvalidConfig(_) => {
                RedirectChain::default()
            }
        }
    }

    /// Category of the failure, for fetch errors.
    pub fn fetch_kind(&self) -> Option<FetchErrorKind> {
        match self {
            TraceError::Fetch { source, .. } => {
                Some(super::categorization::categorize_reqwest_error(source))
            }
            TraceError::InvalidMaxRedirects { .. } | TraceError::InvalidConfig(_) => None,
        }
    }
}

/// Coarse categories of fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// The URL could not be turned into a request (malformed URL, bad header)
    InvalidRequest,
    /// The per-request deadline elapsed
    Timeout,
    /// DNS, TCP or TLS failure while connecting
    Connect,
    /// The connection broke while sending the request or reading headers
    Request,
    /// The body could not be read
    Body,
    /// Anything reqwest does not classify
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    /// Short human-readable label, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidRequest => "invalid request",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connect error",
            FetchErrorKind::Request => "request error",
            FetchErrorKind::Body => "body error",
            FetchErrorKind::Other => "other error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fetch_error_kind_as_str_is_unique() {
        let names: std::collections::HashSet<&str> =
            FetchErrorKind::iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), FetchErrorKind::iter().count());
    }

    #[test]
    fn test_fetch_error_kind_display_matches_as_str() {
        for kind in FetchErrorKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_invalid_max_redirects_message() {
        let err = TraceError::InvalidMaxRedirects { max_redirects: 0 };
        assert_eq!(err.to_string(), "max redirects must be at least 1 (got 0)");
        assert!(err.partial_chain().is_none());
        assert!(err.fetch_kind().is_none());
        assert!(err.into_partial_chain().is_empty());
    }
}
