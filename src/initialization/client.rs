//! HTTP client initialization.
//!
//! The redirect tracer owns the only client. It never follows redirects on its
//! own so that every hop is visible to the tracer.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::TraceConfig;

/// Initializes the shared HTTP client used for redirect tracing.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following disabled (`Policy::none()`), 3xx responses come back as-is
/// - Connection pooling bounded by `max_idle_conns` and `idle_conn_timeout`
/// - Connect timeout from `tls_handshake_timeout` (reqwest's connect phase
///   spans TCP connect and TLS negotiation)
/// - Overall per-request deadline from `request_timeout`
/// - Response compression disabled so captured body sizes are exact
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &TraceConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(config.max_idle_conns)
        .pool_idle_timeout(config.idle_conn_timeout)
        .connect_timeout(config.tls_handshake_timeout)
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .no_gzip()
        .no_brotli()
        .no_deflate()
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_redirect_client_with_defaults() {
        let client = init_redirect_client(&TraceConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_init_redirect_client_rejects_invalid_user_agent() {
        let config = TraceConfig {
            user_agent: "bad\nagent".to_string(),
            ..TraceConfig::default()
        };
        assert!(init_redirect_client(&config).is_err());
    }
}
