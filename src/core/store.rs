//! The user store: one deterministic mutation per dispatched action.
//!
//! `handle` is a total function over (state, action). It never performs
//! I/O itself - remote work is delegated to the `PlatformApi`
//! collaborator and re-enters later as a received action. Observers are
//! notified at most once per action, and only per the notify rules of
//! each action kind.

use tracing::{debug, warn};

use crate::api::{PlatformApi, PERMISSIONS_CATEGORY_USERS};

use super::action::{Action, ViewedType};
use super::collection::UserCollection;
use super::error::ApiError;
use super::fetch_state::FetchState;
use super::identity::{Guid, RoleName};
use super::merge::{merge_list, MergeMode};
use super::notify::{ChangeNotifier, ListenerId};
use super::record::{ScopeStamp, UserRecord};
use super::roles::RoleScope;
use super::wire::unwrap_resources;

/// Store behavior switches.
///
/// `clear_error_on_refetch` is off by default: a new fetch does not
/// forget a previously surfaced error. Turning it on makes a retry wipe
/// the error banner as soon as the fetch starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub clear_error_on_refetch: bool,
}

/// Process-local cache of user records plus per-store fetch state.
///
/// Constructed once at application start and handed to whatever owns the
/// dispatch loop; tests construct a fresh instance per case.
pub struct UserStore {
    collection: UserCollection,
    fetch: FetchState,
    current_user_guid: Option<Guid>,
    currently_viewed_type: ViewedType,
    notifier: ChangeNotifier,
    config: StoreConfig,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            collection: UserCollection::new(),
            fetch: FetchState::new(),
            current_user_guid: None,
            currently_viewed_type: ViewedType::default(),
            notifier: ChangeNotifier::new(),
            config,
        }
    }

    // =========================================================================
    // Dispatch handling
    // =========================================================================

    /// Apply one action. Returns true when observers were notified.
    pub fn handle(&mut self, action: Action, api: &dyn PlatformApi) -> bool {
        let kind = action.kind();
        let notify = match action {
            Action::SpaceUsersFetch { space_guid } => {
                self.begin_fetch();
                if let Err(err) = api.fetch_space_users(&space_guid) {
                    warn!(space_guid = %space_guid, %err, "space users fetch failed to start");
                }
                false
            }
            Action::OrgUsersFetch { org_guid } => {
                self.begin_fetch();
                if let Err(err) = api.fetch_org_users(&org_guid) {
                    warn!(org_guid = %org_guid, %err, "org users fetch failed to start");
                }
                false
            }
            Action::OrgUserRolesFetch { org_guid } => {
                self.begin_fetch();
                if let Err(err) = api.fetch_org_user_roles(&org_guid) {
                    warn!(org_guid = %org_guid, %err, "org user roles fetch failed to start");
                }
                false
            }
            Action::SpaceUsersReceived {
                users,
                org_guid,
                space_guid,
            } => {
                let scope = ScopeStamp {
                    org_guid,
                    space_guid,
                };
                self.receive_users(unwrap_resources(users), MergeMode::Snapshot, &scope);
                true
            }
            Action::OrgUsersReceived { users, org_guid } => {
                let scope = ScopeStamp {
                    org_guid,
                    space_guid: None,
                };
                self.receive_users(unwrap_resources(users), MergeMode::Snapshot, &scope);
                true
            }
            Action::OrgUserRolesReceived {
                org_user_roles,
                org_guid,
            } => {
                let scope = ScopeStamp {
                    org_guid,
                    space_guid: None,
                };
                self.receive_users(unwrap_resources(org_user_roles), MergeMode::RoleUnion, &scope);
                true
            }
            Action::AddedUserRoles {
                role,
                user_guid,
                scope,
            } => self.add_role(&user_guid, role, scope),
            Action::DeletedUserRoles {
                role,
                user_guid,
                scope,
            } => self.remove_role(&user_guid, &role, scope),
            Action::DeleteUser {
                user_guid,
                org_guid,
            } => {
                self.delete_user_remote(&user_guid, &org_guid, api);
                false
            }
            Action::DeletedUser { user_guid, .. } => self.collection.remove(&user_guid),
            Action::ErrorRemoveUser { error, .. } => {
                self.fetch.set_error(error);
                true
            }
            Action::ChangeCurrentlyViewedType { viewed_type } => {
                let changed = self.currently_viewed_type != viewed_type;
                self.currently_viewed_type = viewed_type;
                changed
            }
            Action::ReceivedCurrentUserInfo { current_user_info } => {
                let found = self.collection.contains(&current_user_info.user_id);
                if found {
                    self.current_user_guid = Some(current_user_info.user_id);
                }
                found
            }
        };

        debug!(action = kind, notify, "handled action");
        if notify {
            self.notifier.emit_change();
        }
        notify
    }

    fn begin_fetch(&mut self) {
        self.fetch.begin();
        if self.config.clear_error_on_refetch {
            self.fetch.clear_error();
        }
    }

    fn receive_users(&mut self, records: Vec<UserRecord>, mode: MergeMode, scope: &ScopeStamp) {
        let count = records.len();
        let changed = merge_list(&mut self.collection, records, mode, scope);
        self.fetch.settle();
        debug!(count, changed, "received users");
    }

    fn add_role(&mut self, user_guid: &Guid, role: RoleName, scope: RoleScope) -> bool {
        match self.collection.get_mut(user_guid) {
            Some(record) => record.roles_mut(scope).insert(role),
            None => {
                debug!(user_guid = %user_guid, "role add for unknown user, no-op");
                false
            }
        }
    }

    fn remove_role(&mut self, user_guid: &Guid, role: &RoleName, scope: RoleScope) -> bool {
        match self.collection.get_mut(user_guid) {
            Some(record) => record.roles_mut(scope).remove(role),
            None => {
                debug!(user_guid = %user_guid, "role remove for unknown user, no-op");
                false
            }
        }
    }

    /// Revoke the user's org permissions, then delete server-side only
    /// once the revoke succeeded. Local removal waits for the confirmed
    /// `DeletedUser` action.
    fn delete_user_remote(&mut self, user_guid: &Guid, org_guid: &Guid, api: &dyn PlatformApi) {
        match api.delete_org_user_permissions(user_guid, org_guid, PERMISSIONS_CATEGORY_USERS) {
            Ok(()) => {
                if let Err(err) = api.delete_user(user_guid, org_guid) {
                    warn!(user_guid = %user_guid, %err, "user delete failed to start");
                }
            }
            Err(err) => {
                warn!(user_guid = %user_guid, %err, "permission revoke failed to start");
            }
        }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    pub fn get(&self, guid: &Guid) -> Option<&UserRecord> {
        self.collection.get(guid)
    }

    pub fn get_all(&self) -> Vec<&UserRecord> {
        self.collection.get_all()
    }

    /// Users stamped with this space guid.
    pub fn get_all_in_space(&self, space_guid: &Guid) -> Vec<&UserRecord> {
        self.collection
            .iter()
            .filter(|u| u.space_guid.as_ref() == Some(space_guid))
            .collect()
    }

    /// Users stamped with this org guid.
    pub fn get_all_in_org(&self, org_guid: &Guid) -> Vec<&UserRecord> {
        self.collection
            .iter()
            .filter(|u| u.org_guid.as_ref() == Some(org_guid))
            .collect()
    }

    /// Insert or overwrite without merging. Priming/test setup only.
    pub fn push(&mut self, record: UserRecord) {
        self.collection.push(record);
    }

    /// The record the current-user pointer resolves to, if any.
    ///
    /// The pointer is a guid, not a copy; a record removed after
    /// resolution leaves the pointer dangling and this returns None.
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user_guid
            .as_ref()
            .and_then(|guid| self.collection.get(guid))
    }

    pub fn fetching(&self) -> bool {
        self.fetch.fetching()
    }

    pub fn fetched(&self) -> bool {
        self.fetch.fetched()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.fetch.error()
    }

    pub fn currently_viewed_type(&self) -> ViewedType {
        self.currently_viewed_type
    }

    // =========================================================================
    // Role resolution
    // =========================================================================

    /// Does the current user hold `role` in the given scope?
    ///
    /// False when the pointer is unresolved or the record lacks the
    /// scope's role field. Never panics.
    pub fn has_role(&self, role: &RoleName, scope: RoleScope) -> bool {
        self.current_user()
            .and_then(|user| user.roles(scope))
            .is_some_and(|roles| roles.contains(role))
    }

    pub fn current_user_has_org_role(&self, role: &RoleName) -> bool {
        self.has_role(role, RoleScope::Org)
    }

    pub fn current_user_has_space_role(&self, role: &RoleName) -> bool {
        self.has_role(role, RoleScope::Space)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    pub fn add_change_listener(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.notifier.add_change_listener(listener)
    }

    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.remove_change_listener(id)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
