//! JSON-over-HTTP service exposing the tracer.
//!
//! Provides one endpoint:
//! - `/api/unfurl?url=<url>&depth=<n>` - the redirect chain of `url`, latest hop first
//!
//! Every request shares the same `Requester`, so concurrent traces reuse one
//! connection pool while each builds its own chain.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use crate::fetch::Requester;
use handlers::unfurl_handler;
pub use types::{ApiResponse, ServiceState, UnfurlQuery};

/// Builds the service router.
pub fn build_router(requester: Requester) -> Router {
    Router::new()
        .route("/api/unfurl", get(unfurl_handler))
        .with_state(ServiceState { requester })
}

/// Binds `addr` and serves until the process stops.
pub async fn start_server(addr: &str, requester: Requester) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Listening on {} ...", addr);

    axum::serve(listener, build_router(requester))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
