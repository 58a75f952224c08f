//! Access group types.
//!
//! Access groups gate which site members can see which content. They are
//! read-only from the API's point of view: the only operation is listing
//! them, via [`users::access_groups`](super::users::access_groups).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named permission group scoped to a site.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessGroup {
    /// The unique identifier of the access group.
    #[serde(rename = "_id")]
    pub id: String,

    /// The display name of the access group.
    #[serde(default)]
    pub name: String,

    /// A short identifier used in the Designer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,

    /// The slug used to assign the group to users.
    #[serde(default)]
    pub slug: String,

    /// When the access group was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
}

/// The result of listing a site's access groups.
///
/// Paging counters are surfaced exactly as the API returns them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessGroupList {
    /// The access groups on this page.
    pub access_groups: Vec<AccessGroup>,

    /// Number of access groups returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// The page size limit that was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// The offset that was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Total number of access groups in the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}
