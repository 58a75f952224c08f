//! Site users: types and the resource access functions.
//!
//! Every function here issues exactly one request through the [`HttpClient`]
//! it is given and returns the response decoded into a typed
//! [`ResponseEnvelope`]. Nothing is validated beyond what the parameter types
//! enforce, no site or user is ever defaulted, and failures from the client
//! are returned unchanged.
//!
//! | Function | Method | Path |
//! |---|---|---|
//! | [`list`] | GET | `/sites/{site_id}/users` |
//! | [`get_one`] | GET | `/sites/{site_id}/users/{user_id}` |
//! | [`invite`] | POST | `/sites/{site_id}/users/invite` |
//! | [`update`] | PATCH | `/sites/{site_id}/users/{user_id}` |
//! | [`remove`] | DELETE | `/sites/{site_id}/users/{user_id}` |
//! | [`access_groups`] | GET | `/sites/{site_id}/accessgroups` |
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::rest::resources::users::{self, InviteUserParams, ListUsersParams};
//!
//! let envelope = users::list(&ListUsersParams::new("site1"), &client).await?;
//! for user in &envelope.users {
//!     println!("{} ({:?})", user.id, user.email());
//! }
//!
//! let invited = users::invite(&InviteUserParams::new("site1", "ada@example.com"), &client).await?;
//! println!("Invited {}", invited.id);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResponseEnvelope,
};

use super::access_group::AccessGroupList;

pub use super::user::{RestUserOperations, SiteContext, User, UserOperations};

/// Resource name used in errors.
pub const NAME: &str = "User";

/// Request paths for every user operation.
pub const USER_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::List,
        &["site_id"],
        "/sites/{site_id}/users",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::GetOne,
        &["site_id", "user_id"],
        "/sites/{site_id}/users/{user_id}",
    ),
    ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::Invite,
        &["site_id"],
        "/sites/{site_id}/users/invite",
    ),
    ResourcePath::new(
        HttpMethod::Patch,
        ResourceOperation::Update,
        &["site_id", "user_id"],
        "/sites/{site_id}/users/{user_id}",
    ),
    ResourcePath::new(
        HttpMethod::Delete,
        ResourceOperation::Remove,
        &["site_id", "user_id"],
        "/sites/{site_id}/users/{user_id}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::AccessGroups,
        &["site_id"],
        "/sites/{site_id}/accessgroups",
    ),
];

// ============================================================================
// Payloads
// ============================================================================

/// The account status of a site user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Invited but has not accepted yet.
    Invited,
    /// Accepted and verified their email.
    Verified,
    /// Signed up but has not verified their email.
    Unverified,
    /// A status this SDK does not know about.
    #[serde(other)]
    Unknown,
}

/// An access group a user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessGroupMembership {
    /// The slug of the access group.
    pub slug: String,

    /// How the membership was granted (e.g. "admin", "ecommerce").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A user of a site, as returned by the API.
///
/// `id` is assigned remotely and is never generated locally. Profile
/// attributes live in the free-form `data` bag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// The unique identifier of the user.
    #[serde(rename = "_id")]
    pub id: String,

    /// When the user was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    /// When the user was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    /// When the user was invited, if they were.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_on: Option<DateTime<Utc>>,

    /// When the user last logged in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    /// Whether the user's email address has been verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,

    /// The account status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,

    /// Access groups the user belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_groups: Vec<AccessGroupMembership>,

    /// Profile fields (name, email, custom fields).
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl UserRecord {
    /// Returns the user's email from the profile data, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.data.get("email").and_then(Value::as_str)
    }

    /// Returns the user's name from the profile data, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }

    /// Replaces the identity and profile data with the result of an
    /// invite or update, keeping every other attribute.
    pub fn apply(&mut self, change: UserChange) {
        self.id = change.id;
        self.data = change.data;
    }
}

impl From<UserChange> for UserRecord {
    fn from(change: UserChange) -> Self {
        Self {
            id: change.id,
            data: change.data,
            ..Self::default()
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// The result of listing a site's users.
///
/// Paging counters are surfaced exactly as the API returns them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserList {
    /// The users on this page.
    pub users: Vec<UserRecord>,

    /// Number of users returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// The page size limit that was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// The offset that was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Total number of users in the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// The result of inviting or updating a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserChange {
    /// The identifier of the invited or updated user.
    #[serde(rename = "_id")]
    pub id: String,

    /// The user's profile data after the change.
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// The result of removing a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserDeleted {
    /// Whether the user was deleted.
    pub deleted: bool,
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for [`list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersParams {
    /// The site to list users from.
    pub site_id: String,
    /// Maximum number of users to return.
    pub limit: Option<u32>,
    /// Number of users to skip.
    pub offset: Option<u32>,
    /// Sort expression, passed through verbatim (e.g. `-CreatedOn`).
    pub sort: Option<String>,
}

impl ListUsersParams {
    /// Creates parameters listing users of `site_id` with API defaults.
    #[must_use]
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            ..Self::default()
        }
    }
}

/// Parameters for [`get_one`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUserParams {
    /// The site the user belongs to.
    pub site_id: String,
    /// The user to fetch.
    pub user_id: String,
}

impl GetUserParams {
    /// Creates parameters for fetching `user_id` in `site_id`.
    #[must_use]
    pub fn new(site_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// Parameters for [`invite`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteUserParams {
    /// The site to invite the user to.
    pub site_id: String,
    /// The email address to send the invitation to.
    pub email: String,
    /// Slugs of access groups to assign on acceptance.
    pub access_groups: Option<Vec<String>>,
}

impl InviteUserParams {
    /// Creates parameters inviting `email` to `site_id`.
    #[must_use]
    pub fn new(site_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            email: email.into(),
            access_groups: None,
        }
    }
}

/// The body of an update: only the fields that are set are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    /// Profile fields to change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,

    /// Replacement set of access group slugs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_groups: Option<Vec<String>>,

    /// Whether the user's email is verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
}

/// Parameters for [`update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    /// The site the user belongs to.
    pub site_id: String,
    /// The user to update.
    pub user_id: String,
    /// The changes to apply.
    pub data: UpdateUserData,
}

/// Parameters for [`remove`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveUserParams {
    /// The site the user belongs to.
    pub site_id: String,
    /// The user to remove.
    pub user_id: String,
}

impl RemoveUserParams {
    /// Creates parameters for removing `user_id` from `site_id`.
    #[must_use]
    pub fn new(site_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// Parameters for [`access_groups`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessGroupsParams {
    /// The site to list access groups from.
    pub site_id: String,
    /// Maximum number of access groups to return.
    pub limit: Option<u32>,
    /// Number of access groups to skip.
    pub offset: Option<u32>,
    /// Sort expression, passed through verbatim.
    pub sort: Option<String>,
}

impl AccessGroupsParams {
    /// Creates parameters listing access groups of `site_id` with API defaults.
    #[must_use]
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InviteBody<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_groups: Option<&'a [String]>,
}

// ============================================================================
// Resource access functions
// ============================================================================

/// Lists the users of a site.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the client rejects the request and
/// [`ResourceError::Decode`] if the body is not a user list.
pub async fn list(
    params: &ListUsersParams,
    client: &HttpClient,
) -> Result<ResponseEnvelope<UserList>, ResourceError> {
    let query = page_query(params.limit, params.offset, params.sort.as_deref());
    send(
        client,
        ResourceOperation::List,
        &[("site_id", params.site_id.as_str())],
        query,
        None,
    )
    .await
}

/// Fetches a single user.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the client rejects the request and
/// [`ResourceError::Decode`] if the body is not a user.
pub async fn get_one(
    params: &GetUserParams,
    client: &HttpClient,
) -> Result<ResponseEnvelope<UserRecord>, ResourceError> {
    send(
        client,
        ResourceOperation::GetOne,
        &[
            ("site_id", params.site_id.as_str()),
            ("user_id", params.user_id.as_str()),
        ],
        None,
        None,
    )
    .await
}

/// Invites a new user to a site by email.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the client rejects the request and
/// [`ResourceError::Decode`] if the body is not an `{ _id, data }` result.
pub async fn invite(
    params: &InviteUserParams,
    client: &HttpClient,
) -> Result<ResponseEnvelope<UserChange>, ResourceError> {
    let body = InviteBody {
        email: &params.email,
        access_groups: params.access_groups.as_deref(),
    };
    let body = encode(&body, ResourceOperation::Invite)?;
    send(
        client,
        ResourceOperation::Invite,
        &[("site_id", params.site_id.as_str())],
        None,
        Some(body),
    )
    .await
}

/// Partially updates a user. `params.data` is sent as the request body.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the client rejects the request and
/// [`ResourceError::Decode`] if the body is not an `{ _id, data }` result.
pub async fn update(
    params: &UpdateUserParams,
    client: &HttpClient,
) -> Result<ResponseEnvelope<UserChange>, ResourceError> {
    let body = encode(&params.data, ResourceOperation::Update)?;
    send(
        client,
        ResourceOperation::Update,
        &[
            ("site_id", params.site_id.as_str()),
            ("user_id", params.user_id.as_str()),
        ],
        None,
        Some(body),
    )
    .await
}

/// Removes a user from a site.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the client rejects the request and
/// [`ResourceError::Decode`] if the body is not a deletion result. A 2xx
/// with an empty body (such as `204 No Content`) has no `deleted` field and
/// is reported as [`ResourceError::Decode`].
pub async fn remove(
    params: &RemoveUserParams,
    client: &HttpClient,
) -> Result<ResponseEnvelope<UserDeleted>, ResourceError> {
    send(
        client,
        ResourceOperation::Remove,
        &[
            ("site_id", params.site_id.as_str()),
            ("user_id", params.user_id.as_str()),
        ],
        None,
        None,
    )
    .await
}

/// Lists the access groups of a site.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if the client rejects the request and
/// [`ResourceError::Decode`] if the body is not an access group list.
pub async fn access_groups(
    params: &AccessGroupsParams,
    client: &HttpClient,
) -> Result<ResponseEnvelope<AccessGroupList>, ResourceError> {
    let query = page_query(params.limit, params.offset, params.sort.as_deref());
    send(
        client,
        ResourceOperation::AccessGroups,
        &[("site_id", params.site_id.as_str())],
        query,
        None,
    )
    .await
}

/// Resolves the path for `operation`, sends one request, and decodes the reply.
async fn send<T: DeserializeOwned>(
    client: &HttpClient,
    operation: ResourceOperation,
    ids: &[(&str, &str)],
    query: Option<HashMap<String, String>>,
    body: Option<Value>,
) -> Result<ResponseEnvelope<T>, ResourceError> {
    let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(USER_PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: NAME,
            operation: operation.as_str(),
        },
    )?;

    let mut builder = HttpRequest::builder(path.http_method, build_path(path.template, ids));
    if let Some(query) = query {
        builder = builder.query(query);
    }
    if let Some(body) = body {
        builder = builder.body(body).body_type(DataType::Json);
    }
    let request = builder.build().map_err(HttpError::from)?;

    let response = client.request(request).await?;
    ResponseEnvelope::from_http_response(response, NAME, operation.as_str())
}

fn encode<B: Serialize>(body: &B, operation: ResourceOperation) -> Result<Value, ResourceError> {
    serde_json::to_value(body).map_err(|source| ResourceError::Encode {
        resource: NAME,
        operation: operation.as_str(),
        source,
    })
}

fn page_query(
    limit: Option<u32>,
    offset: Option<u32>,
    sort: Option<&str>,
) -> Option<HashMap<String, String>> {
    let mut query = HashMap::new();
    if let Some(limit) = limit {
        query.insert("limit".to_string(), limit.to_string());
    }
    if let Some(offset) = offset {
        query.insert("offset".to_string(), offset.to_string());
    }
    if let Some(sort) = sort {
        query.insert("sort".to_string(), sort.to_string());
    }
    (!query.is_empty()).then_some(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_operation_has_a_path() {
        let cases = [
            (ResourceOperation::List, vec!["site_id"], "/sites/{site_id}/users"),
            (
                ResourceOperation::GetOne,
                vec!["site_id", "user_id"],
                "/sites/{site_id}/users/{user_id}",
            ),
            (ResourceOperation::Invite, vec!["site_id"], "/sites/{site_id}/users/invite"),
            (
                ResourceOperation::Update,
                vec!["site_id", "user_id"],
                "/sites/{site_id}/users/{user_id}",
            ),
            (
                ResourceOperation::Remove,
                vec!["site_id", "user_id"],
                "/sites/{site_id}/users/{user_id}",
            ),
            (
                ResourceOperation::AccessGroups,
                vec!["site_id"],
                "/sites/{site_id}/accessgroups",
            ),
        ];

        for (operation, ids, template) in cases {
            let path = get_path(USER_PATHS, operation, &ids).unwrap();
            assert_eq!(path.template, template);
            assert_eq!(path.http_method, operation.default_http_method());
        }
    }

    #[test]
    fn test_user_operations_need_user_id() {
        for operation in [
            ResourceOperation::GetOne,
            ResourceOperation::Update,
            ResourceOperation::Remove,
        ] {
            assert!(get_path(USER_PATHS, operation, &["site_id"]).is_none());
        }
    }

    #[test]
    fn test_user_record_deserialization() {
        let json = r#"{
            "_id": "6287ec36a841b25637c663df",
            "createdOn": "2022-05-20T13:46:12.093Z",
            "updatedOn": "2022-05-20T13:46:12.093Z",
            "emailVerified": true,
            "status": "verified",
            "accessGroups": [{"slug": "webflowers", "type": "admin"}],
            "data": {
                "name": "Some One",
                "email": "some@one.com",
                "accept-privacy": false,
                "accept-communications": false
            }
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "6287ec36a841b25637c663df");
        assert_eq!(user.email_verified, Some(true));
        assert_eq!(user.status, Some(UserStatus::Verified));
        assert_eq!(user.access_groups[0].slug, "webflowers");
        assert_eq!(user.access_groups[0].kind.as_deref(), Some("admin"));
        assert_eq!(user.email(), Some("some@one.com"));
        assert_eq!(user.name(), Some("Some One"));
        assert_eq!(user.data["accept-privacy"], json!(false));
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let user: UserRecord =
            serde_json::from_str(r#"{"_id": "u1", "status": "suspended"}"#).unwrap();
        assert_eq!(user.status, Some(UserStatus::Unknown));
        assert!(user.data.is_empty());
    }

    #[test]
    fn test_apply_change_keeps_other_attributes() {
        let mut user: UserRecord = serde_json::from_value(json!({
            "_id": "u1",
            "emailVerified": true,
            "data": {"name": "Old"}
        }))
        .unwrap();

        let change: UserChange =
            serde_json::from_value(json!({"_id": "u1", "data": {"name": "New"}})).unwrap();
        user.apply(change);

        assert_eq!(user.name(), Some("New"));
        assert_eq!(user.email_verified, Some(true));
    }

    #[test]
    fn test_update_data_serializes_only_set_fields() {
        let data = UpdateUserData {
            email_verified: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({"emailVerified": true}));

        let mut profile = Map::new();
        profile.insert("name".to_string(), json!("Ada"));
        let data = UpdateUserData {
            data: Some(profile),
            access_groups: Some(vec!["vip".to_string()]),
            email_verified: None,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"data": {"name": "Ada"}, "accessGroups": ["vip"]})
        );
    }

    #[test]
    fn test_invite_body_shape() {
        let body = InviteBody {
            email: "ada@example.com",
            access_groups: None,
        };
        assert_eq!(
            encode(&body, ResourceOperation::Invite).unwrap(),
            json!({"email": "ada@example.com"})
        );

        let groups = vec!["vip".to_string()];
        let body = InviteBody {
            email: "ada@example.com",
            access_groups: Some(groups.as_slice()),
        };
        assert_eq!(
            encode(&body, ResourceOperation::Invite).unwrap(),
            json!({"email": "ada@example.com", "accessGroups": ["vip"]})
        );
    }

    #[test]
    fn test_page_query_only_includes_set_values() {
        assert!(page_query(None, None, None).is_none());

        let query = page_query(Some(10), None, Some("-CreatedOn")).unwrap();
        assert_eq!(query.get("limit"), Some(&"10".to_string()));
        assert_eq!(query.get("sort"), Some(&"-CreatedOn".to_string()));
        assert!(!query.contains_key("offset"));
    }

    #[test]
    fn test_deleted_result_shape() {
        let deleted: UserDeleted = serde_json::from_str(r#"{"deleted": true}"#).unwrap();
        assert!(deleted.deleted);
    }
}
