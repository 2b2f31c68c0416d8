//! Typed action messages.
//!
//! Every message the dispatch transport can deliver to the store, as one
//! tagged union so the handler match is exhaustive: adding an action kind
//! without handling it fails to compile.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::identity::{Guid, RoleName};
use super::roles::RoleScope;
use super::wire::WireUser;

/// Which user list a view is currently presenting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewedType {
    #[default]
    SpaceUsers,
    OrgUsers,
}

/// Identity payload for the operator driving the session.
///
/// `user_id` matches against record guids; the record itself must already
/// be in the collection for resolution to succeed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserInfo {
    pub user_id: Guid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Action message.
///
/// View-originated intents and server-originated results share one type;
/// provenance travels on the dispatch envelope, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all_fields = "camelCase")]
pub enum Action {
    SpaceUsersFetch {
        space_guid: Guid,
    },
    OrgUsersFetch {
        org_guid: Guid,
    },
    OrgUserRolesFetch {
        org_guid: Guid,
    },
    SpaceUsersReceived {
        users: Vec<WireUser>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        org_guid: Option<Guid>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        space_guid: Option<Guid>,
    },
    OrgUsersReceived {
        users: Vec<WireUser>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        org_guid: Option<Guid>,
    },
    OrgUserRolesReceived {
        org_user_roles: Vec<WireUser>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        org_guid: Option<Guid>,
    },
    AddedUserRoles {
        role: RoleName,
        user_guid: Guid,
        scope: RoleScope,
    },
    DeletedUserRoles {
        role: RoleName,
        user_guid: Guid,
        scope: RoleScope,
    },
    DeleteUser {
        user_guid: Guid,
        org_guid: Guid,
    },
    DeletedUser {
        user_guid: Guid,
        org_guid: Guid,
    },
    ErrorRemoveUser {
        user_guid: Guid,
        error: ApiError,
    },
    ChangeCurrentlyViewedType {
        viewed_type: ViewedType,
    },
    ReceivedCurrentUserInfo {
        current_user_info: CurrentUserInfo,
    },
}

impl Action {
    /// Stable kind string for logging and auditing.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SpaceUsersFetch { .. } => "SPACE_USERS_FETCH",
            Action::OrgUsersFetch { .. } => "ORG_USERS_FETCH",
            Action::OrgUserRolesFetch { .. } => "ORG_USER_ROLES_FETCH",
            Action::SpaceUsersReceived { .. } => "SPACE_USERS_RECEIVED",
            Action::OrgUsersReceived { .. } => "ORG_USERS_RECEIVED",
            Action::OrgUserRolesReceived { .. } => "ORG_USER_ROLES_RECEIVED",
            Action::AddedUserRoles { .. } => "ADDED_USER_ROLES",
            Action::DeletedUserRoles { .. } => "DELETED_USER_ROLES",
            Action::DeleteUser { .. } => "DELETE_USER",
            Action::DeletedUser { .. } => "DELETED_USER",
            Action::ErrorRemoveUser { .. } => "ERROR_REMOVE_USER",
            Action::ChangeCurrentlyViewedType { .. } => "CHANGE_CURRENTLY_VIEWED_TYPE",
            Action::ReceivedCurrentUserInfo { .. } => "RECEIVED_CURRENT_USER_INFO",
        }
    }
}
