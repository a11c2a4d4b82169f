//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network. The round-trip itself is delegated to a
//! `Transport` handed to the adapter at construction, so tests can swap in a
//! canned transport and the server can plug in a real HTTP agent.

use std::sync::Arc;

use crate::error::ApiError;

/// An outbound GET described as plain data.
///
/// Built by `NoticesClient::build_fetch_notices`. `query` pairs are not yet
/// percent-encoded; encoding is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Value of the first query pair named `key`, if any.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by a `Transport` after executing an `HttpRequest`, then passed
/// to `NoticesClient::parse_fetch_notices`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one `HttpRequest`.
///
/// Implementations return `ApiError::Transport` when the call itself fails
/// (connection refused, DNS, TLS, timeout). Any status code the server sends
/// back is returned as data; status interpretation belongs to the client.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Body text of a response read as raw bytes. A body that is not UTF-8 can
/// never be a JSON document, so it fails as `ApiError::Decode`.
pub fn body_text(bytes: Vec<u8>) -> Result<String, ApiError> {
    String::from_utf8(bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_value_finds_first_match() {
        let req = HttpRequest {
            url: "http://localhost/data.json".to_string(),
            query: vec![
                ("results-page".to_string(), "4".to_string()),
                ("results-page".to_string(), "9".to_string()),
            ],
            headers: Vec::new(),
        };
        assert_eq!(req.query_value("results-page"), Some("4"));
        assert_eq!(req.query_value("missing"), None);
    }

    #[test]
    fn body_text_accepts_utf8() {
        assert_eq!(body_text(b"{\"entry\": []}".to_vec()).unwrap(), "{\"entry\": []}");
    }

    #[test]
    fn body_text_rejects_invalid_utf8_as_decode_error() {
        let err = body_text(b"{\"entry\": \"\xff\xfe\"}".to_vec()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn success_covers_2xx_only() {
        let mut resp = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(resp.is_success());
        resp.status = 301;
        assert!(!resp.is_success());
        resp.status = 199;
        assert!(!resp.is_success());
    }
}
