//! HTTP request building for a single hop.

use reqwest::header::{ACCEPT, CONNECTION};

use crate::config::{ACCEPT_TEXTUAL, CONNECTION_CLOSE};

/// Headers sent on every hop, on top of the client's User-Agent.
///
/// Only textual content is useful to the tracer, and each hop usually goes to
/// a different host, so the connection is not kept alive.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the hop headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(ACCEPT, ACCEPT_TEXTUAL)
            .header(CONNECTION, CONNECTION_CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT_ENCODING, USER_AGENT};

    #[test]
    fn test_hop_request_headers() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply_to_request_builder(client.get("http://a.example/"))
            .build()
            .expect("request builds");
        let headers = request.headers();

        assert_eq!(
            headers.get(ACCEPT).and_then(|v| v.to_str().ok()),
            Some("text/html,text/plain;q=0.9")
        );
        assert_eq!(
            headers.get(CONNECTION).and_then(|v| v.to_str().ok()),
            Some("close")
        );
        // The User-Agent comes from the client, compression is never requested
        assert!(headers.get(USER_AGENT).is_none());
        assert!(headers.get(ACCEPT_ENCODING).is_none());
        assert_eq!(headers.len(), 2);
    }
}
