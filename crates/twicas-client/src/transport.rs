//! HTTP transport for the TwitCasting API.
//!
//! Requests and responses are plain data so the dispatch pipeline can be
//! exercised against [`crate::mock::MockTransport`] as well as the real
//! reqwest-backed [`HttpTransport`]. The transport never retries and never
//! adds headers beyond the ones it was constructed with (plus
//! `Content-Type` when a JSON body is sent).

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::TwicasError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// POST and PUT carry parameters as a JSON body, GET and DELETE as a query string.
    pub fn sends_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// A fully-formed request: absolute URL (query included) and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<Value>,
}

/// Status, headers and undecoded body of an upstream response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Response carrying `body` serialized as JSON.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
            .with_header("Content-Type", "application/json")
    }

    /// Add a header. Names or values that are not valid HTTP are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value as text, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one HTTP exchange per call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TwicasError>;
}

/// reqwest-backed transport with fixed default headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// `default_headers` are sent on every request. `gzip` enables transparent
    /// decoding of gzip-compressed bodies.
    pub fn new(default_headers: HeaderMap, gzip: bool) -> Result<Self, TwicasError> {
        let http = reqwest::Client::builder()
            .default_headers(default_headers)
            .gzip(gzip)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TwicasError> {
        let ApiRequest { method, url, body } = request;
        let mut builder = self.http.request(method.as_reqwest(), url.clone());
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        tracing::debug!(%method, %url, status, bytes = body.len(), "TwitCasting API call finished");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_post_and_put_send_bodies() {
        assert!(HttpMethod::Post.sends_body());
        assert!(HttpMethod::Put.sends_body());
        assert!(!HttpMethod::Get.sends_body());
        assert!(!HttpMethod::Delete.sends_body());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let raw = RawResponse::new(200, "{}").with_header("X-RateLimit-Limit", "60");
        assert_eq!(raw.header("x-ratelimit-limit"), Some("60"));
        assert_eq!(raw.header("X-RateLimit-Limit"), Some("60"));
    }

    #[test]
    fn invalid_header_names_are_ignored() {
        let raw = RawResponse::new(200, "").with_header("bad header", "1");
        assert!(raw.headers.is_empty());
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
    }
}
