//! Transport seam: one `HttpRequest` in, one `RawResponse` out.
//!
//! The endpoint base never talks to a socket directly; it hands a fully
//! resolved request to a [`Transport`]. [`ReqwestTransport`] is the default.

use crate::error::HttpError;
use crate::http::fields::Fields;

use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether fields travel in the request body rather than the query string.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Patch)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL without a query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub fields: Fields,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform one HTTP round trip.
///
/// Implementations report network failures as [`HttpError::Transport`] and
/// return every received response, whatever its status, as `Ok`.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<RawResponse, HttpError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, HttpError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let encoded = request
            .fields
            .to_urlencoded()
            .map_err(|e| HttpError::Transport(e.to_string().into()))?;

        let mut url = request.url;
        if !request.method.has_body() && !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }

        let mut req = self.client.request(method, &url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if request.method.has_body() {
            req = req
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(encoded);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_body_placement() {
        assert!(Method::Post.has_body());
        assert!(Method::Patch.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_raw_response_success_range() {
        let ok = RawResponse { status: 201, body: String::new() };
        let redirect = RawResponse { status: 304, body: String::new() };
        let bad = RawResponse { status: 400, body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!bad.is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = HttpRequest {
            method: Method::Get,
            url: "https://api-fxpractice.oanda.com/v1/prices".to_string(),
            headers: vec![("Authorization".to_string(), "Bearer k".to_string())],
            fields: Fields::new(),
        };
        assert_eq!(req.header("authorization"), Some("Bearer k"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).is_ok());
    }
}
