//! HTTP client types for Webflow API communication.
//!
//! This module is the transport collaborator the resource layer is handed:
//! it builds requests, attaches the configured credentials, and turns replies
//! into raw [`HttpResponse`] envelopes.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client (`get`, `post`, `patch`, `delete`)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw response envelope (status, headers, body, request config)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Unified error type for transport and non-2xx failures
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::{ApiToken, WebflowConfig};
//! use webflow_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/sites/site1/users")
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failures
//!
//! There is no retry logic. A network failure or non-2xx status is returned
//! from the first and only attempt.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit, RequestConfig};
