//! # Webflow API Rust SDK
//!
//! A Rust client for the site users endpoints of the Webflow Data API:
//! listing, fetching, inviting, updating, and removing site users, and
//! listing a site's access groups.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WebflowConfig`] and [`WebflowConfigBuilder`]
//! - Validated newtypes for the API token and host
//! - An async [`HttpClient`] that sends one request per call, with no retries
//! - One async function per user operation in [`rest::resources::users`]
//! - A [`User`](rest::resources::User) instance type whose `update` and
//!   `remove` methods reuse the stored site and user ids
//!
//! ## Quick Start
//!
//! ```rust
//! use webflow_api::{ApiToken, ApiVersion, WebflowConfig};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working With Users
//!
//! ```rust,ignore
//! use webflow_api::{ApiToken, HttpClient, WebflowConfig};
//! use webflow_api::rest::resources::users::{self, ListUsersParams, SiteContext, User};
//!
//! let config = WebflowConfig::builder()
//!     .api_token(ApiToken::new("your-api-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! // Static call with explicit ids
//! let listed = users::list(&ListUsersParams::new("site1"), &client).await?;
//! println!("{} users", listed.users.len());
//!
//! // Bound calls on a fetched user
//! let params = users::GetUserParams::new("site1", "u1");
//! let envelope = users::get_one(&params, &client).await?;
//! let user = User::from_envelope(client.clone(), envelope, SiteContext::new("site1"));
//! user.remove().await?;
//! ```
//!
//! ## Errors
//!
//! - [`ConfigError`]: invalid configuration values
//! - [`HttpError`]: network failures and non-2xx responses
//! - [`rest::ResourceError`]: everything a resource operation can return,
//!   with [`HttpError`] passed through unchanged
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and clients are passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ApiVersion, HostUrl, WebflowConfig, WebflowConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RateLimit, RequestConfig,
};

// Re-export resource infrastructure
pub use rest::{ResourceError, ResponseEnvelope};
