//! Path building infrastructure for REST resources.
//!
//! Every resource declares its operations as a constant table of
//! [`ResourcePath`] entries. The resource functions look up the entry for the
//! operation they perform with [`get_path`] and interpolate identifiers into
//! its template with [`build_path`]. That table is the only place request
//! paths are spelled out.
//!
//! # Example
//!
//! ```rust
//! use webflow_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use webflow_api::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[ResourcePath::new(
//!     HttpMethod::Get,
//!     ResourceOperation::GetOne,
//!     &["site_id", "user_id"],
//!     "/sites/{site_id}/users/{user_id}",
//! )];
//!
//! let path = get_path(PATHS, ResourceOperation::GetOne, &["site_id", "user_id"]).unwrap();
//! let url = build_path(path.template, &[("site_id", "site1"), ("user_id", "u1")]);
//! assert_eq!(url, "/sites/site1/users/u1");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a site-scoped REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List every resource in a site (GET).
    List,
    /// Fetch a single resource by ID (GET).
    GetOne,
    /// Invite a new member to a site (POST).
    Invite,
    /// Partially update an existing resource (PATCH).
    Update,
    /// Delete a resource (DELETE).
    Remove,
    /// List the access groups of a site (GET).
    AccessGroups,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::GetOne | Self::AccessGroups => HttpMethod::Get,
            Self::Invite => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Remove => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::GetOne => "get_one",
            Self::Invite => "invite",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::AccessGroups => "access_groups",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{name}` placeholders for identifier interpolation, e.g.
/// `/sites/{site_id}/users/{user_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required identifier names, in template order.
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the path for an operation.
///
/// Among the paths registered for `operation` whose required IDs are all
/// available, the most specific one (most IDs) wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Values are inserted verbatim, in a single pass over the template, so a
/// value that itself looks like a placeholder is never expanded again.
/// Placeholders without a matching value are left in place.
///
/// # Example
///
/// ```rust
/// use webflow_api::rest::build_path;
///
/// let url = build_path("/sites/{site_id}/accessgroups", &[("site_id", "abc")]);
/// assert_eq!(url, "/sites/abc/accessgroups");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            result.push_str(&rest[open..]);
            return result;
        };

        let name = &after_open[..close];
        match ids.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => result.push_str(value),
            None => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    result.push_str(rest);
    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
