//! Resources for version 1.0.0 of the Webflow Data API.

pub mod access_group;
pub mod user;
pub mod users;

pub use access_group::{AccessGroup, AccessGroupList};
pub use user::{RestUserOperations, SiteContext, User, UserOperations};
pub use users::{
    AccessGroupMembership, AccessGroupsParams, GetUserParams, InviteUserParams, ListUsersParams,
    RemoveUserParams, UpdateUserData, UpdateUserParams, UserChange, UserDeleted, UserList,
    UserRecord, UserStatus,
};
