//! REST resource infrastructure for the Webflow API.
//!
//! This module provides the pieces every resource is built from:
//!
//! - **Path building**: a constant [`ResourcePath`] table per resource,
//!   resolved with [`get_path`] and interpolated with [`build_path`]
//! - **[`ResponseEnvelope<T>`]**: a Deref-based wrapper pairing typed results
//!   with the raw HTTP response
//! - **[`ResourceError`]**: error type for resource operations
//!
//! Individual resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::rest::resources::users::{self, GetUserParams, SiteContext, User};
//!
//! // Static call with explicit parameters
//! let params = GetUserParams::new("site1", "u1");
//! let envelope = users::get_one(&params, &client).await?;
//!
//! // Wrap into a live instance and use its bound methods
//! let user = User::from_envelope(client.clone(), envelope, SiteContext::new("site1"));
//! let deleted = user.remove().await?;
//! assert!(deleted.deleted);
//! ```

mod errors;
mod path;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use response::ResponseEnvelope;
