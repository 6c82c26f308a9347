//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually, one hop at a time, so every
//! intermediate response (headers and a capped body) is kept. Two redirect
//! signals are recognized: a 3xx status with a `Location` header, and an HTML
//! meta-refresh tag.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::LOCATION;

use crate::chain::{ChainRecorder, Hop, RedirectChain};
use crate::config::{validate_max_redirects, TraceConfig};
use crate::error_handling::{categorize_reqwest_error, InitializationError, TraceError};
use crate::fetch::meta_refresh::extract_meta_refresh;
use crate::fetch::request::RequestHeaders;
use crate::fetch::snapshot::{capture_body, content_type, is_html, is_textual, snapshot_headers};
use crate::initialization::init_redirect_client;

/// How a hop points to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectSignal {
    /// Terminal response
    NoRedirect,
    /// 3xx status with a non-empty `Location` header
    StatusRedirect(String),
    /// `<meta http-equiv="refresh">` tag in an HTML body
    MetaRedirect(String),
}

impl RedirectSignal {
    /// Classifies a response. The status redirect is checked first, so it
    /// wins when a response carries both signals.
    ///
    /// `body` is only scanned when `html` is true.
    pub fn classify(status: u16, location: Option<&str>, html: bool, body: &str) -> Self {
        if (300..400).contains(&status) {
            if let Some(loc) = location.filter(|l| !l.is_empty()) {
                return RedirectSignal::StatusRedirect(loc.to_string());
            }
        }
        if html && !body.is_empty() {
            if let Some(target) = extract_meta_refresh(body) {
                return RedirectSignal::MetaRedirect(target);
            }
        }
        RedirectSignal::NoRedirect
    }

    /// The raw target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            RedirectSignal::NoRedirect => None,
            RedirectSignal::StatusRedirect(t) | RedirectSignal::MetaRedirect(t) => Some(t),
        }
    }
}

/// A 3xx that leads nowhere: no usable `Location` and no meta-refresh either.
fn is_dead_end_redirect(status: u16, signal: &RedirectSignal) -> bool {
    (300..400).contains(&status) && *signal == RedirectSignal::NoRedirect
}

/// Traces redirect chains with one long-lived connection pool.
///
/// Cloning is cheap: clones share the same client, so concurrent traces on
/// clones (or on one `Requester` behind an `Arc`) share pooled connections
/// while each trace owns its own chain.
#[derive(Debug, Clone)]
pub struct Requester {
    config: TraceConfig,
    client: Arc<reqwest::Client>,
}

impl Requester {
    /// Applies defaults to `config` and builds the shared client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be
    /// built (for example a User-Agent that is not a valid header value).
    pub fn new(config: TraceConfig) -> Result<Self, InitializationError> {
        let config = config.with_defaults();
        let client = init_redirect_client(&config)?;
        Ok(Self { config, client })
    }

    /// The effective configuration, defaults applied.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Follows redirects from `url` up to the configured hop bound.
    ///
    /// # Errors
    ///
    /// - `TraceError::InvalidMaxRedirects` if the bound is below 1
    /// - `TraceError::Fetch` if any hop fails; it carries the hops completed so far
    pub async fn follow_redirects(&self, url: &str) -> Result<RedirectChain, TraceError> {
        self.follow_redirects_with_limit(url, self.config.max_redirects)
            .await
    }

    /// Follows redirects with a caller cutoff.
    ///
    /// `depth == 0` means no cutoff; otherwise the bound is the smaller of
    /// `depth` and the configured maximum.
    pub async fn follow_redirects_to_depth(
        &self,
        url: &str,
        depth: usize,
    ) -> Result<RedirectChain, TraceError> {
        self.follow_redirects_with_limit(url, self.config.effective_max_redirects(depth))
            .await
    }

    /// Follows redirects from `url`, fetching at most `max_hops` times.
    ///
    /// # Errors
    ///
    /// See [`Requester::follow_redirects`].
    pub async fn follow_redirects_with_limit(
        &self,
        url: &str,
        max_hops: usize,
    ) -> Result<RedirectChain, TraceError> {
        validate_max_redirects(max_hops)?;

        let mut recorder = ChainRecorder::with_capacity(max_hops);
        let mut current = url.to_string();

        for i in 0..max_hops {
            if i > 0 && self.config.delay_ms > 0 {
                tokio::time::sleep(self.config.delay()).await;
            }

            let hop = match self.fetch_hop(&current).await {
                Ok(hop) => hop,
                Err(source) => {
                    warn!(
                        "Hop {} to {} failed ({}): {}",
                        i + 1,
                        current,
                        categorize_reqwest_error(&source),
                        source
                    );
                    return Err(TraceError::Fetch {
                        url: current,
                        partial: recorder.finish(),
                        source,
                    });
                }
            };

            let next = (!hop.is_terminal()).then(|| hop.target_url.clone());
            recorder.record(hop);

            match next {
                Some(target) => current = target,
                None => break,
            }
        }

        Ok(recorder.finish())
    }

    /// Fetches one URL and classifies the response.
    async fn fetch_hop(&self, url: &str) -> Result<Hop, reqwest::Error> {
        let response = RequestHeaders::apply_to_request_builder(self.client.get(url))
            .timeout(self.config.request_timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = snapshot_headers(response.headers());
        let ctype = content_type(response.headers());
        let location = response
            .headers()
            .get(LOCATION)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        let body = if is_textual(&ctype) {
            capture_body(response, self.config.max_body_size).await
        } else {
            String::new()
        };

        let signal =
            RedirectSignal::classify(status, location.as_deref(), is_html(&ctype), &body);
        if is_dead_end_redirect(status, &signal) {
            warn!("Redirect status {} for {} but no Location header", status, url);
        }

        // Reported and followed exactly as sent; a relative target fails the next fetch
        let target_url = signal.target().map(str::to_string).unwrap_or_default();
        debug!("{} {} -> {:?}", status, url, signal);

        Ok(Hop {
            url: url.to_string(),
            target_url,
            headers,
            body,
        })
    }
}

/// Traces `url` once with a fresh `Requester`.
///
/// Convenient for one-shot callers; services should build one `Requester` and
/// reuse it so the connection pool is shared.
///
/// # Errors
///
/// Configuration errors (a hop bound below 1, a client that cannot be built)
/// are reported before any network activity; otherwise see
/// [`Requester::follow_redirects`].
pub async fn trace(config: &TraceConfig, url: &str) -> Result<RedirectChain, TraceError> {
    let requester = Requester::new(config.clone())?;
    requester.follow_redirects(url).await
}
