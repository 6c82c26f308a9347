//! Error categorization.

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Timeouts are checked first: reqwest flags a connect timeout as both
/// `is_connect` and `is_timeout`, and the deadline is the more useful answer.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_builder() {
        FetchErrorKind::InvalidRequest
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_body() || error.is_decode() {
        FetchErrorKind::Body
    } else if error.is_request() {
        FetchErrorKind::Request
    } else {
        FetchErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_categorize_invalid_url_as_invalid_request() {
        let client = reqwest::Client::new();
        let error = client
            .get("not a url")
            .send()
            .await
            .expect_err("an unparseable URL cannot be sent");
        assert_eq!(
            categorize_reqwest_error(&error),
            FetchErrorKind::InvalidRequest
        );
    }

    #[tokio::test]
    async fn test_categorize_refused_connection_as_connect() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = reqwest::Client::new();
        let error = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect_err("nothing listens on the port");
        assert_eq!(categorize_reqwest_error(&error), FetchErrorKind::Connect);
    }
}
