// Shared test helpers: local mock servers and fast trace configurations.
//
// Every server binds 127.0.0.1:0, so tests never touch the network and can run
// in parallel.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::Router;
use tokio::net::TcpListener;

use unfurl::TraceConfig;

/// Binds a local port, builds the app with its base URL, and serves it in the
/// background. Returns the base URL (`http://127.0.0.1:<port>`).
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app<F>(build: F) -> String
where
    F: FnOnce(String) -> Router,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let base = format!("http://{}", addr);
    let app = build(base.clone());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    base
}

/// Default configuration with a 1ms inter-hop delay.
#[allow(dead_code)] // Used by other test files
pub fn fast_config() -> TraceConfig {
    TraceConfig {
        delay_ms: 1,
        request_timeout: Duration::from_secs(5),
        ..TraceConfig::default()
    }
}

/// A URL on a port nobody listens on.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);
    format!("http://{}{}", addr, path)
}

/// A redirect response with the given status and `Location`.
#[allow(dead_code)] // Used by other test files
pub fn redirect(status: StatusCode, location: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .expect("valid redirect response")
}

/// A 200 response with the given content type and body.
#[allow(dead_code)] // Used by other test files
pub fn page(content_type: &str, body: impl Into<String>) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.into()))
        .expect("valid page response")
}

/// An HTML page that meta-refreshes to `target`.
#[allow(dead_code)] // Used by other test files
pub fn meta_refresh_page(target: &str) -> Response<Body> {
    page(
        "text/html; charset=utf-8",
        format!(
            "<html><head>\n<meta http-equiv=\"refresh\" content=\"0;url={}\">\n</head><body>Moved</body></html>",
            target
        ),
    )
}
