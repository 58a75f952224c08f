//! HTTP response types for the Webflow API SDK.
//!
//! This module provides [`HttpResponse`], the raw response envelope returned
//! by the HTTP client, along with [`RequestConfig`] and [`RateLimit`].

use std::collections::HashMap;

use crate::clients::HttpMethod;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("60", "58").unwrap();
/// assert_eq!(limit.limit, 60);
/// assert_eq!(limit.remaining, 58);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the limit and remaining header values.
    ///
    /// Returns `None` if either value is not an unsigned integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }
}

/// The request that produced a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestConfig {
    /// The HTTP method that was sent.
    pub method: HttpMethod,
    /// The full URL that was requested, without query string.
    pub url: String,
}

/// The raw response envelope from the Webflow API.
///
/// Carries the status metadata, headers, untyped JSON body, and the
/// configuration of the request that produced it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for the status code, or empty if unknown.
    pub status_text: String,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// The request that produced this response, when known.
    pub config: Option<RequestConfig>,
    /// Rate limit information, when the headers were present.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, deriving the status text and rate limit
    /// from the code and headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let status_text = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default()
            .to_string();

        let first = |name: &str| headers.get(name).and_then(|values| values.first());
        let rate_limit = match (first("x-ratelimit-limit"), first("x-ratelimit-remaining")) {
            (Some(limit), Some(remaining)) => RateLimit::parse(limit, remaining),
            _ => None,
        };

        Self {
            code,
            status_text,
            headers,
            body,
            config: None,
            rate_limit,
        }
    }

    /// Attaches the configuration of the request that produced this response.
    #[must_use]
    pub fn with_config(mut self, config: RequestConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
