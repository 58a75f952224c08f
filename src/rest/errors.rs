//! Resource-specific error types for REST API operations.
//!
//! Resource operations do not interpret HTTP failures. A transport failure or
//! non-2xx response is carried through unchanged as [`ResourceError::Http`];
//! the other variants cover the resource layer's own work of encoding request
//! bodies and decoding typed results.
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::rest::ResourceError;
//! use webflow_api::rest::resources::users::{self, GetUserParams};
//!
//! match users::get_one(&params, &client).await {
//!     Ok(envelope) => println!("Found: {}", envelope.id),
//!     Err(ResourceError::Http(e)) => println!("Request rejected: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The HTTP client rejected the request (transport failure or non-2xx).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// No path is registered for the operation with the provided IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode {resource}::{operation} request body: {source}")]
    Encode {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the operation's result shape.
    #[error("Failed to decode {resource}::{operation} response: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Returns the HTTP status code if the request was rejected with a
    /// non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_http_error_passes_through_unchanged() {
        let error: ResourceError = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"msg":"not found"}"#.to_string(),
            error_reference: Some("req-1".to_string()),
        })
        .into();

        assert_eq!(error.to_string(), r#"{"msg":"not found"}"#);
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_decode_error_names_operation() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = ResourceError::Decode {
            resource: "User",
            operation: "list",
            source,
        };

        let message = error.to_string();
        assert!(message.contains("User::list"));
        assert!(error.status().is_none());
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_path_resolution_failed_message() {
        let error = ResourceError::PathResolutionFailed {
            resource: "User",
            operation: "update",
        };
        assert_eq!(
            error.to_string(),
            "Cannot resolve path for User::update with provided IDs"
        );
    }
}
