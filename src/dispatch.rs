//! Synchronous in-process dispatch transport.
//!
//! Delivers one action at a time; each handler runs to completion before
//! the next action is processed. All mutation happens on this one logical
//! thread, so the store needs no locks.

use tracing::trace;

use crate::api::PlatformApi;
use crate::core::{Action, Guid, ListenerId, RoleName, RoleScope, UserStore};

/// Where an action originated. Handler logic is identical either way;
/// provenance exists for logging and auditing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSource {
    View,
    Server,
}

impl ActionSource {
    fn as_str(self) -> &'static str {
        match self {
            ActionSource::View => "view",
            ActionSource::Server => "server",
        }
    }
}

/// Owns the store and the fetch collaborator; the single entry point for
/// delivering actions.
pub struct Dispatcher<A: PlatformApi> {
    store: UserStore,
    api: A,
}

impl<A: PlatformApi> Dispatcher<A> {
    pub fn new(store: UserStore, api: A) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut UserStore {
        &mut self.store
    }

    /// Deliver a user-triggered intent.
    pub fn handle_view_action(&mut self, action: Action) -> bool {
        self.dispatch(ActionSource::View, action)
    }

    /// Deliver an authoritative server result.
    pub fn handle_server_action(&mut self, action: Action) -> bool {
        self.dispatch(ActionSource::Server, action)
    }

    fn dispatch(&mut self, source: ActionSource, action: Action) -> bool {
        trace!(source = source.as_str(), action = action.kind(), "dispatch");
        self.store.handle(action, &self.api)
    }

    // =========================================================================
    // Action creators
    // =========================================================================
    //
    // Role grants/revokes call the collaborator first and dispatch the
    // confirmed action only on success - mutations are never applied
    // optimistically.

    /// Grant a role, then record the confirmed membership.
    pub fn add_user_roles(
        &mut self,
        role: RoleName,
        user_guid: Guid,
        org_guid: &Guid,
        scope: RoleScope,
    ) -> bool {
        match self
            .api
            .put_org_user_permissions(&user_guid, org_guid, &role)
        {
            Ok(()) => self.dispatch(
                ActionSource::Server,
                Action::AddedUserRoles {
                    role,
                    user_guid,
                    scope,
                },
            ),
            Err(err) => {
                tracing::warn!(user_guid = %user_guid, %err, "role grant failed");
                false
            }
        }
    }

    /// Revoke a role, then record the confirmed removal.
    pub fn delete_user_roles(
        &mut self,
        role: RoleName,
        user_guid: Guid,
        org_guid: &Guid,
        scope: RoleScope,
    ) -> bool {
        match self
            .api
            .delete_org_user_permissions(&user_guid, org_guid, role.as_str())
        {
            Ok(()) => self.dispatch(
                ActionSource::Server,
                Action::DeletedUserRoles {
                    role,
                    user_guid,
                    scope,
                },
            ),
            Err(err) => {
                tracing::warn!(user_guid = %user_guid, %err, "role revoke failed");
                false
            }
        }
    }

    pub fn add_change_listener(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.store.add_change_listener(listener)
    }

    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.store.remove_change_listener(id)
    }
}
