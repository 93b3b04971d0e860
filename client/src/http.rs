//! HTTP transport types and URL helpers.
//!
//! # Design
//! Requests and responses cross the `Transport` boundary as plain data, so
//! the response pipeline in `client` can be exercised with scripted
//! responses and never needs a live socket in unit tests. All fields use
//! owned types (`String`, `Vec`) so values can be recorded and replayed
//! freely by test doubles.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient` and handed to a [`crate::transport::Transport`]
/// implementation for execution. `url` is absolute and already carries the
/// query string, if any.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Status codes are carried as data even for 4xx/5xx; classification
/// happens in the response pipeline, not in the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Everything except the characters axios leaves alone in query values.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');

/// Percent-encode one path segment (e.g. a table name containing spaces).
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, ENCODE_SET).to_string()
}

/// Render query parameters as a percent-encoded query string without the
/// leading `?`. An empty slice renders as an empty string.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_segment(k), encode_segment(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_success_covers_2xx_only() {
        for status in [200, 201, 204, 299] {
            assert!(HttpResponse { status, body: String::new() }.is_success());
        }
        for status in [199, 300, 400, 404, 500] {
            assert!(!HttpResponse { status, body: String::new() }.is_success());
        }
    }

    #[test]
    fn encode_query_joins_pairs() {
        let q = encode_query(&[("page", "1"), ("pageSize", "10")]);
        assert_eq!(q, "page=1&pageSize=10");
    }

    #[test]
    fn encode_query_empty_is_empty() {
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn encode_query_escapes_reserved_characters() {
        let q = encode_query(&[("name", "a b&c")]);
        assert_eq!(q, "name=a%20b%26c");
    }

    #[test]
    fn encode_segment_keeps_unreserved_characters() {
        assert_eq!(encode_segment("user_events-2.0"), "user_events-2.0");
        assert_eq!(encode_segment("order items"), "order%20items");
    }
}
