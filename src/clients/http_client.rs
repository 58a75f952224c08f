//! HTTP client implementation for the Webflow API.
//!
//! This module provides the [`HttpClient`] type: the transport collaborator
//! every resource operation is handed. It sends exactly one request per call
//! and never retries.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, RequestConfig};
use crate::config::WebflowConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async HTTP client for the Webflow API.
///
/// Credentials, API version, and user agent are fixed at construction time
/// from a [`WebflowConfig`] and sent on every request.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone: clones share the same
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::{ApiToken, WebflowConfig};
/// use webflow_api::clients::HttpClient;
///
/// let config = WebflowConfig::builder()
///     .api_token(ApiToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let response = client.get("/sites/site1/users", None).await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.webflow.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &WebflowConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Webflow API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "accept-version".to_string(),
            config.api_version().to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_token().as_ref()),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.host().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()?).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.request(request).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.request(request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }

    /// Sends an HTTP request to the Webflow API.
    ///
    /// Each `/`-separated segment of the path is appended to the base URI as
    /// a path segment, so `?`, `#` and `%` inside an id are percent-encoded
    /// rather than read as URL syntax.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.join_url(&request.path)?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
            HttpMethod::Patch => self.client.patch(url.clone()),
            HttpMethod::Delete => self.client.delete(url.clone()),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body).with_config(RequestConfig {
            method: request.http_method,
            url: url.to_string(),
        });

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "received response"
        );

        if response.is_ok() {
            return Ok(response);
        }

        let message = Self::serialize_error(&response);
        tracing::warn!(
            "Request to Webflow API at {} failed with status {}: {}",
            request.path,
            code,
            message
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Appends the segments of `path` to the base URI.
    fn join_url(&self, path: &str) -> Result<reqwest::Url, InvalidHttpRequestError> {
        let invalid = || InvalidHttpRequestError::InvalidUrl {
            url: self.base_uri.clone(),
        };

        let mut url = reqwest::Url::parse(&self.base_uri).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the API's error fields into a JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["msg", "code", "name", "err", "problems", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, ApiVersion, HostUrl};
    use serde_json::json;

    fn create_test_config() -> WebflowConfig {
        WebflowConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_default_host() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "https://api.webflow.com");
    }

    #[test]
    fn test_client_uses_configured_host() {
        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .host(HostUrl::new("http://localhost:4010/").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://localhost:4010");
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_accept_version_header_follows_config() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("accept-version"),
            Some(&"1.0.0".to_string())
        );

        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .api_version(ApiVersion::Custom("2.0.0".to_string()))
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(
            client.default_headers().get("accept-version"),
            Some(&"2.0.0".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Webflow API Library v"));
    }

    #[test]
    fn test_debug_masks_token() {
        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("super-secret-token").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("Bearer *****"));
        assert!(debug.contains("https://api.webflow.com"));
        assert!(debug.contains("accept-version"));
    }

    #[test]
    fn test_join_url_encodes_reserved_characters_in_segments() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let url = client.join_url("/sites/site1/users/u1?x=1#frag").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.webflow.com/sites/site1/users/u1%3Fx=1%23frag"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_join_url_keeps_base_path() {
        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .host(HostUrl::new("http://localhost:4010/proxy/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let url = client.join_url("/sites/site1/accessgroups").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4010/proxy/sites/site1/accessgroups");
    }

    #[test]
    fn test_serialize_error_keeps_api_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(
            404,
            headers,
            json!({"msg": "Requested resource not found", "code": 404, "path": "/x"}),
        );

        let message: serde_json::Value =
            serde_json::from_str(&HttpClient::serialize_error(&response)).unwrap();

        assert_eq!(message["msg"], "Requested resource not found");
        assert_eq!(message["code"], 404);
        assert!(message.get("path").is_none());
        assert!(message["error_reference"].as_str().unwrap().contains("req-9"));
    }
}
