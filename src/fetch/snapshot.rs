//! Header and body snapshots of a hop's response.

use std::collections::BTreeMap;

use log::debug;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use crate::config::{CONTENT_TYPE_HTML, CONTENT_TYPE_PLAIN};

/// Content type of a response, lowercased, empty when absent.
pub(crate) fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Whether the body of this content type is captured.
pub(crate) fn is_textual(content_type: &str) -> bool {
    content_type.starts_with(CONTENT_TYPE_PLAIN) || content_type.starts_with(CONTENT_TYPE_HTML)
}

/// Whether the body may carry a meta-refresh tag.
pub(crate) fn is_html(content_type: &str) -> bool {
    content_type.starts_with(CONTENT_TYPE_HTML)
}

/// One value per header name; when a header repeats, the last value wins.
///
/// Names are reported in canonical form (`content-type` becomes `Content-Type`).
pub(crate) fn snapshot_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut snapshot = BTreeMap::new();
    for (name, value) in headers {
        snapshot.insert(
            canonical_header_name(name.as_str()),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    snapshot
}

/// `x-forwarded-for` -> `X-Forwarded-For`
pub(crate) fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Reads at most `max_bytes` of the body.
///
/// Reading stops as soon as the ceiling is reached. A body that cannot be read
/// yields an empty snapshot rather than failing the hop.
pub(crate) async fn capture_body(mut response: reqwest::Response, max_bytes: usize) -> String {
    let mut buf: Vec<u8> = Vec::with_capacity(max_bytes.min(16 * 1024));
    while buf.len() < max_bytes {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let room = max_bytes - buf.len();
                buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Discarding unreadable body of {}: {}", response.url(), e);
                return String::new();
            }
        }
    }
    decode_capped(&buf, max_bytes)
}

/// Decodes bytes as UTF-8 (lossily) without exceeding `max_bytes`.
///
/// A multi-byte character split by the ceiling is dropped rather than turned
/// into a replacement character.
pub(crate) fn decode_capped(bytes: &[u8], max_bytes: usize) -> String {
    let mut bytes = &bytes[..bytes.len().min(max_bytes)];
    if let Err(e) = std::str::from_utf8(bytes) {
        if e.error_len().is_none() {
            bytes = &bytes[..e.valid_up_to()];
        }
    }

    let mut text = String::from_utf8_lossy(bytes).into_owned();
    if text.len() > max_bytes {
        let mut end = max_bytes;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}
