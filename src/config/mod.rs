//! Configuration types for the Webflow API SDK.
//!
//! This module provides the configuration used to construct an
//! [`HttpClient`](crate::clients::HttpClient). Everything the client sends on
//! every request (credentials, API version, user agent) is decided here, once,
//! at construction time.
//!
//! # Overview
//!
//! - [`WebflowConfig`]: The configuration struct holding all SDK settings
//! - [`WebflowConfigBuilder`]: A builder for constructing [`WebflowConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`HostUrl`]: A validated API base URL
//! - [`ApiVersion`]: The Webflow API version to request
//!
//! # Example
//!
//! ```rust
//! use webflow_api::{WebflowConfig, ApiToken, ApiVersion};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, HostUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Webflow API SDK.
///
/// `WebflowConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use webflow_api::{WebflowConfig, ApiToken, HostUrl};
///
/// let config = WebflowConfig::builder()
///     .api_token(ApiToken::new("your-token").unwrap())
///     .host(HostUrl::new("http://localhost:8080").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.host().as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct WebflowConfig {
    api_token: ApiToken,
    host: HostUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl WebflowConfig {
    /// Creates a new builder for constructing a `WebflowConfig`.
    #[must_use]
    pub fn builder() -> WebflowConfigBuilder {
        WebflowConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WebflowConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebflowConfig>();
};

/// Builder for constructing [`WebflowConfig`] instances.
///
/// The only required field is `api_token`.
///
/// # Defaults
///
/// - `host`: `https://api.webflow.com`
/// - `api_version`: Latest known version (`1.0.0`)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WebflowConfigBuilder {
    api_token: Option<ApiToken>,
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl WebflowConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebflowConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set.
    pub fn build(self) -> Result<WebflowConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(WebflowConfig {
            api_token,
            host: self.host.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_token() {
        let result = WebflowConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V1_0_0);
        assert_eq!(config.host().as_ref(), "https://api.webflow.com");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:9000").unwrap();

        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("token").unwrap())
            .host(host.clone())
            .api_version(ApiVersion::Custom("2.0.0".to_string()))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.host(), &host);
        assert_eq!(config.api_version().to_string(), "2.0.0");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = WebflowConfig::builder()
            .api_token(ApiToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("WebflowConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
