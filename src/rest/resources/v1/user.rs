//! Live user instances.
//!
//! A [`User`] pairs a fetched [`UserRecord`] with the client, raw response,
//! and [`SiteContext`] it came from. Its [`update`](User::update) and
//! [`remove`](User::remove) methods fill in `site_id` and `user_id` from that
//! stored state and hand off to the same functions used for direct calls in
//! [`users`](super::users), through a [`UserOperations`] strategy.
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::rest::resources::users::{self, GetUserParams, SiteContext, UpdateUserData, User};
//!
//! let envelope = users::get_one(&GetUserParams::new("site1", "u1"), &client).await?;
//! let user = User::from_envelope(client.clone(), envelope, SiteContext::new("site1"));
//!
//! let user = user
//!     .update(UpdateUserData { email_verified: Some(true), ..Default::default() })
//!     .await?;
//! user.remove().await?;
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::clients::{HttpClient, HttpResponse};
use crate::rest::resources::v1::access_group::AccessGroupList;
use crate::rest::resources::v1::users::{
    self, AccessGroupsParams, GetUserParams, InviteUserParams, ListUsersParams,
    RemoveUserParams, UpdateUserData, UpdateUserParams, UserChange, UserDeleted, UserList,
    UserRecord,
};
use crate::rest::{ResourceError, ResponseEnvelope};

/// The site a user instance is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteContext {
    /// The site identifier.
    pub site_id: String,
}

impl SiteContext {
    /// Creates a context for `site_id`.
    #[must_use]
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
        }
    }
}

/// The six user operations, as an injectable strategy.
///
/// Every method defaults to the matching function in
/// [`users`](super::users), so an implementation only overrides what it
/// needs to observe or replace.
#[async_trait]
pub trait UserOperations: Send + Sync {
    /// See [`users::list`].
    async fn list(
        &self,
        params: &ListUsersParams,
        client: &HttpClient,
    ) -> Result<ResponseEnvelope<UserList>, ResourceError> {
        users::list(params, client).await
    }

    /// See [`users::get_one`].
    async fn get_one(
        &self,
        params: &GetUserParams,
        client: &HttpClient,
    ) -> Result<ResponseEnvelope<UserRecord>, ResourceError> {
        users::get_one(params, client).await
    }

    /// See [`users::invite`].
    async fn invite(
        &self,
        params: &InviteUserParams,
        client: &HttpClient,
    ) -> Result<ResponseEnvelope<UserChange>, ResourceError> {
        users::invite(params, client).await
    }

    /// See [`users::update`].
    async fn update(
        &self,
        params: &UpdateUserParams,
        client: &HttpClient,
    ) -> Result<ResponseEnvelope<UserChange>, ResourceError> {
        users::update(params, client).await
    }

    /// See [`users::remove`].
    async fn remove(
        &self,
        params: &RemoveUserParams,
        client: &HttpClient,
    ) -> Result<ResponseEnvelope<UserDeleted>, ResourceError> {
        users::remove(params, client).await
    }

    /// See [`users::access_groups`].
    async fn access_groups(
        &self,
        params: &AccessGroupsParams,
        client: &HttpClient,
    ) -> Result<ResponseEnvelope<AccessGroupList>, ResourceError> {
        users::access_groups(params, client).await
    }
}

/// Sends every operation over HTTP via the functions in [`users`](super::users).
#[derive(Debug, Clone, Copy, Default)]
pub struct RestUserOperations;

impl UserOperations for RestUserOperations {}

/// A fetched user bound to its site and client.
///
/// Derefs to its [`UserRecord`], so payload fields read as `user.id`,
/// `user.data`, and so on.
#[derive(Clone)]
pub struct User {
    client: HttpClient,
    response: HttpResponse,
    record: UserRecord,
    context: SiteContext,
    operations: Arc<dyn UserOperations>,
}

impl User {
    /// Creates an instance from its parts, using [`RestUserOperations`].
    #[must_use]
    pub fn new(
        client: HttpClient,
        response: HttpResponse,
        record: UserRecord,
        context: SiteContext,
    ) -> Self {
        Self {
            client,
            response,
            record,
            context,
            operations: Arc::new(RestUserOperations),
        }
    }

    /// Wraps the result of [`users::get_one`].
    #[must_use]
    pub fn from_envelope(
        client: HttpClient,
        envelope: ResponseEnvelope<UserRecord>,
        context: SiteContext,
    ) -> Self {
        let (record, response) = envelope.into_parts();
        Self::new(client, response, record, context)
    }

    /// Wraps the result of [`users::invite`] or [`users::update`].
    #[must_use]
    pub fn from_change(
        client: HttpClient,
        envelope: ResponseEnvelope<UserChange>,
        context: SiteContext,
    ) -> Self {
        let (change, response) = envelope.into_parts();
        Self::new(client, response, UserRecord::from(change), context)
    }

    /// Replaces the strategy the bound methods delegate to.
    #[must_use]
    pub fn with_operations(mut self, operations: Arc<dyn UserOperations>) -> Self {
        self.operations = operations;
        self
    }

    /// Returns the client this instance sends through.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the raw response this instance was built from.
    #[must_use]
    pub const fn response(&self) -> &HttpResponse {
        &self.response
    }

    /// Returns the site context.
    #[must_use]
    pub const fn context(&self) -> &SiteContext {
        &self.context
    }

    /// Returns the site identifier.
    #[must_use]
    pub fn site_id(&self) -> &str {
        &self.context.site_id
    }

    /// Returns the payload.
    #[must_use]
    pub const fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Consumes the instance and returns the payload.
    #[must_use]
    pub fn into_record(self) -> UserRecord {
        self.record
    }

    /// Updates this user and returns a refreshed instance.
    ///
    /// The refreshed instance keeps this one's client, context, and
    /// strategy. `self` is left as it was, whether or not the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`users::update`] call returns.
    pub async fn update(&self, data: UpdateUserData) -> Result<Self, ResourceError> {
        let params = UpdateUserParams {
            site_id: self.context.site_id.clone(),
            user_id: self.record.id.clone(),
            data,
        };
        debug!(
            site_id = %params.site_id,
            user_id = %params.user_id,
            "Updating user"
        );

        let (change, response) = self
            .operations
            .update(&params, &self.client)
            .await?
            .into_parts();

        let mut record = self.record.clone();
        record.apply(change);

        Ok(Self {
            client: self.client.clone(),
            response,
            record,
            context: self.context.clone(),
            operations: Arc::clone(&self.operations),
        })
    }

    /// Removes this user from its site.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`users::remove`] call returns.
    pub async fn remove(&self) -> Result<ResponseEnvelope<UserDeleted>, ResourceError> {
        let params = RemoveUserParams {
            site_id: self.context.site_id.clone(),
            user_id: self.record.id.clone(),
        };
        debug!(
            site_id = %params.site_id,
            user_id = %params.user_id,
            "Removing user"
        );

        self.operations.remove(&params, &self.client).await
    }
}

impl Deref for User {
    type Target = UserRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("record", &self.record)
            .field("context", &self.context)
            .field("status", &self.response.code)
            .finish_non_exhaustive()
    }
}

// Verify User is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<User>();
};
