//! Version-specific REST resource implementations.
//!
//! Resources are grouped by the API version they were written against:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v1/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! The latest version is re-exported here, so both of these work:
//!
//! ```rust,ignore
//! use webflow_api::rest::resources::users::{self, ListUsersParams};
//! use webflow_api::rest::resources::v1::users::{self, ListUsersParams};
//! ```
//!
//! # Users
//!
//! [`users`] holds one async function per operation. Each takes a parameter
//! struct and an [`HttpClient`](crate::clients::HttpClient) and sends exactly
//! one request:
//!
//! ```rust,ignore
//! use webflow_api::rest::resources::users::{self, ListUsersParams, RemoveUserParams};
//!
//! let listed = users::list(&ListUsersParams::new("site1"), &client).await?;
//! let deleted = users::remove(&RemoveUserParams::new("site1", "u1"), &client).await?;
//! assert!(deleted.deleted);
//! ```
//!
//! A fetched user can be wrapped in a [`User`] so that later calls pick up
//! its site and id automatically:
//!
//! ```rust,ignore
//! use webflow_api::rest::resources::{SiteContext, UpdateUserData, User};
//!
//! let user = User::from_envelope(client.clone(), envelope, SiteContext::new("site1"));
//! let user = user.update(UpdateUserData::default()).await?;
//! ```
//!
//! # Access Groups
//!
//! Access groups are listed with [`users::access_groups`] and are otherwise
//! read-only.

pub mod v1;

pub use v1::{access_group, user, users};

pub use v1::{
    AccessGroup, AccessGroupList, AccessGroupMembership, AccessGroupsParams, GetUserParams,
    InviteUserParams, ListUsersParams, RemoveUserParams, RestUserOperations, SiteContext,
    UpdateUserData, UpdateUserParams, User, UserChange, UserDeleted, UserList, UserOperations,
    UserRecord, UserStatus,
};
