//! Service data structures.

use serde::{Deserialize, Serialize};

use crate::chain::Hop;
use crate::fetch::Requester;

/// Shared state for the service: one requester, one connection pool.
#[derive(Clone)]
pub struct ServiceState {
    /// Tracer shared by every request
    pub requester: Requester,
}

/// Query string of `GET /api/unfurl`.
///
/// `depth` stays a string so a bad value gets the service's own 400 message
/// rather than axum's query rejection.
#[derive(Debug, Deserialize)]
pub struct UnfurlQuery {
    /// URL to trace
    pub url: Option<String>,
    /// Optional cutoff, `0` or absent for the full chain
    pub depth: Option<String>,
}

/// JSON envelope of every response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    /// Whether the trace completed
    #[serde(default)]
    pub success: bool,
    /// Hops, latest first; partial when `success` is false
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub result: Vec<Hop>,
    /// Error message, present only on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    /// A successful response carrying `result`.
    pub fn ok(result: Vec<Hop>) -> Self {
        Self {
            success: true,
            result,
            error: None,
        }
    }

    /// A failed response with no hops.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: Vec::new(),
            error: Some(message.into()),
        }
    }
}
