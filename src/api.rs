//! Boundary to the remote platform API (the fetch collaborator).
//!
//! Every operation is fire-and-forget from the store's perspective: a
//! call either starts the remote work or reports why it could not, and
//! the eventual result re-enters the system as a new dispatched action.
//! Transport details (HTTP status and friends) stay behind this trait.

use crate::core::{ApiError, Guid, RoleName};

/// Permissions category covering every role a user holds in an org,
/// used when removing a user outright rather than revoking one role.
pub const PERMISSIONS_CATEGORY_USERS: &str = "users";

/// Remote operations the store and action creators delegate to.
pub trait PlatformApi {
    /// Fetch all users with access to a space.
    fn fetch_space_users(&self, space_guid: &Guid) -> Result<(), ApiError>;

    /// Fetch all users in an org.
    fn fetch_org_users(&self, org_guid: &Guid) -> Result<(), ApiError>;

    /// Fetch org-scoped role memberships for an org's users.
    fn fetch_org_user_roles(&self, org_guid: &Guid) -> Result<(), ApiError>;

    /// Grant a role to a user in an org.
    fn put_org_user_permissions(
        &self,
        user_guid: &Guid,
        org_guid: &Guid,
        role: &RoleName,
    ) -> Result<(), ApiError>;

    /// Revoke a role (or a whole category of permissions) from a user.
    fn delete_org_user_permissions(
        &self,
        user_guid: &Guid,
        org_guid: &Guid,
        permissions: &str,
    ) -> Result<(), ApiError>;

    /// Delete the user server-side. Only valid once the user's org
    /// permissions have been revoked.
    fn delete_user(&self, user_guid: &Guid, org_guid: &Guid) -> Result<(), ApiError>;
}
