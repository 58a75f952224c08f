//! Typed response envelope for REST resource operations.
//!
//! [`ResponseEnvelope<T>`] pairs an operation's typed result with the raw
//! [`HttpResponse`] it was decoded from, so status, headers, and request
//! configuration stay available next to the data. It implements `Deref` for
//! ergonomic access to the typed result.
//!
//! ```rust,ignore
//! let envelope = users::list(&ListUsersParams::new("site1"), &client).await?;
//!
//! // Typed data via Deref
//! println!("{} users", envelope.users.len());
//!
//! // Transport metadata
//! println!("{} {}", envelope.status(), envelope.status_text());
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{HttpResponse, RateLimit, RequestConfig};
use crate::rest::ResourceError;

/// A typed response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use serde_json::json;
/// use webflow_api::HttpResponse;
/// use webflow_api::rest::ResponseEnvelope;
///
/// let raw = HttpResponse::new(200, HashMap::new(), json!({"deleted": true}));
/// let envelope = ResponseEnvelope::new(true, raw);
///
/// assert!(*envelope);
/// assert_eq!(envelope.status(), 200);
/// assert_eq!(envelope.status_text(), "OK");
/// ```
#[derive(Debug, Clone)]
pub struct ResponseEnvelope<T> {
    payload: T,
    response: HttpResponse,
}

impl<T> ResponseEnvelope<T> {
    /// Creates a new envelope from already-typed data and its raw response.
    #[must_use]
    pub const fn new(payload: T, response: HttpResponse) -> Self {
        Self { payload, response }
    }

    /// Returns a reference to the typed data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.payload
    }

    /// Returns a mutable reference to the typed data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Consumes the envelope and returns the typed data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.payload
    }

    /// Consumes the envelope and returns the typed data and raw response.
    #[must_use]
    pub fn into_parts(self) -> (T, HttpResponse) {
        (self.payload, self.response)
    }

    /// Transforms the typed data, keeping the raw response.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            payload: f(self.payload),
            response: self.response,
        }
    }

    /// Returns the raw response this envelope was decoded from.
    #[must_use]
    pub const fn raw(&self) -> &HttpResponse {
        &self.response
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.code
    }

    /// Returns the status reason phrase.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.response.status_text
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.response.headers
    }

    /// Returns the configuration of the request that produced this response.
    #[must_use]
    pub const fn config(&self) -> Option<&RequestConfig> {
        self.response.config.as_ref()
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.response.rate_limit.as_ref()
    }

    /// Returns the request ID, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response.request_id()
    }
}

impl<T: DeserializeOwned> ResponseEnvelope<T> {
    /// Decodes a raw response body into the operation's result shape.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body does not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
        operation: &'static str,
    ) -> Result<Self, ResourceError> {
        let payload = T::deserialize(&response.body).map_err(|source| ResourceError::Decode {
            resource,
            operation,
            source,
        })?;

        Ok(Self { payload, response })
    }
}

impl<T> Deref for ResponseEnvelope<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.payload
    }
}

impl<T> DerefMut for ResponseEnvelope<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.payload
    }
}

// Verify ResponseEnvelope is Send + Sync when T is
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResponseEnvelope<String>>();
};
