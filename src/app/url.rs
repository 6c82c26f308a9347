//! URL validation for trace requests.

use thiserror::Error;

/// The URL is not an `http://` or `https://` URL.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("URL must start with http:// or https://")]
pub struct UnsupportedScheme;

/// Checks that a URL may be handed to the tracer.
///
/// Only the scheme prefix is checked, case-sensitively, and length is not
/// limited. The URL is not normalized: the chain reports it exactly as given,
/// and a URL that does not parse surfaces later as a fetch error on the first
/// hop.
pub fn validate_scheme(url: &str) -> Result<(), UnsupportedScheme> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(UnsupportedScheme)
    }
}
