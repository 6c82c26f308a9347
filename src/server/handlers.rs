//! Service HTTP handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, warn};

use super::types::{ApiResponse, ServiceState, UnfurlQuery};
use crate::app::url::validate_scheme;

const INVALID_DEPTH: &str = "Invalid depth parameter: must be a positive integer greater than 0";

/// `GET /api/unfurl?url=<url>&depth=<n>`
///
/// Responds 200 with the chain, 400 for a bad query, and 500 when a hop fails
/// (with the hops completed before the failure, if any).
pub async fn unfurl_handler(
    State(state): State<ServiceState>,
    Query(query): Query<UnfurlQuery>,
) -> Response {
    let Some(url) = query.url.filter(|u| !u.is_empty()) else {
        return reply(StatusCode::BAD_REQUEST, ApiResponse::error("Missing url parameter"));
    };

    if validate_scheme(&url).is_err() {
        return reply(StatusCode::BAD_REQUEST, ApiResponse::error("Invalid URL scheme"));
    }

    let depth = match query.depth.as_deref() {
        None | Some("") => 0,
        Some(raw) => match raw.parse::<usize>() {
            Ok(depth) => depth,
            Err(_) => return reply(StatusCode::BAD_REQUEST, ApiResponse::error(INVALID_DEPTH)),
        },
    };

    debug!("Tracing {} (depth {})", url, depth);
    match state.requester.follow_redirects_to_depth(&url, depth).await {
        Ok(chain) => reply(StatusCode::OK, ApiResponse::ok(chain.into_hops())),
        Err(e) => {
            warn!("Trace of {} failed: {}", url, e);
            let message = format!("Error following redirects: {}", e);
            let response = ApiResponse {
                result: e.into_partial_chain().into_hops(),
                ..ApiResponse::error(message)
            };
            reply(StatusCode::INTERNAL_SERVER_ERROR, response)
        }
    }
}

fn reply(status: StatusCode, body: ApiResponse) -> Response {
    (status, Json(body)).into_response()
}
