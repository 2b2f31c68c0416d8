//! Shared test fixtures: a recording collaborator double and payload
//! helpers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use deckhand::{ApiError, Guid, PlatformApi, RoleName, UserRecord, UserStore, WireUser};

/// One recorded collaborator call, argument-for-argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    FetchSpaceUsers {
        space_guid: String,
    },
    FetchOrgUsers {
        org_guid: String,
    },
    FetchOrgUserRoles {
        org_guid: String,
    },
    PutOrgUserPermissions {
        user_guid: String,
        org_guid: String,
        role: String,
    },
    DeleteOrgUserPermissions {
        user_guid: String,
        org_guid: String,
        permissions: String,
    },
    DeleteUser {
        user_guid: String,
        org_guid: String,
    },
}

#[derive(Default)]
struct Inner {
    calls: RefCell<Vec<ApiCall>>,
    fail_with: RefCell<Option<ApiError>>,
}

/// Collaborator double. Clones share state so tests can keep a handle
/// after moving one copy into the dispatcher.
#[derive(Clone, Default)]
pub struct RecordingApi {
    inner: Rc<Inner>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails with this error.
    pub fn fail_with(&self, error: ApiError) {
        *self.inner.fail_with.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        self.inner.calls.borrow_mut().push(call);
        match self.inner.fail_with.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl PlatformApi for RecordingApi {
    fn fetch_space_users(&self, space_guid: &Guid) -> Result<(), ApiError> {
        self.record(ApiCall::FetchSpaceUsers {
            space_guid: space_guid.to_string(),
        })
    }

    fn fetch_org_users(&self, org_guid: &Guid) -> Result<(), ApiError> {
        self.record(ApiCall::FetchOrgUsers {
            org_guid: org_guid.to_string(),
        })
    }

    fn fetch_org_user_roles(&self, org_guid: &Guid) -> Result<(), ApiError> {
        self.record(ApiCall::FetchOrgUserRoles {
            org_guid: org_guid.to_string(),
        })
    }

    fn put_org_user_permissions(
        &self,
        user_guid: &Guid,
        org_guid: &Guid,
        role: &RoleName,
    ) -> Result<(), ApiError> {
        self.record(ApiCall::PutOrgUserPermissions {
            user_guid: user_guid.to_string(),
            org_guid: org_guid.to_string(),
            role: role.to_string(),
        })
    }

    fn delete_org_user_permissions(
        &self,
        user_guid: &Guid,
        org_guid: &Guid,
        permissions: &str,
    ) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteOrgUserPermissions {
            user_guid: user_guid.to_string(),
            org_guid: org_guid.to_string(),
            permissions: permissions.to_string(),
        })
    }

    fn delete_user(&self, user_guid: &Guid, org_guid: &Guid) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteUser {
            user_guid: user_guid.to_string(),
            org_guid: org_guid.to_string(),
        })
    }
}

pub fn guid(s: &str) -> Guid {
    Guid::parse(s).expect("valid guid")
}

pub fn role(s: &str) -> RoleName {
    RoleName::parse(s).expect("valid role")
}

pub fn user(g: &str) -> UserRecord {
    UserRecord::new(guid(g))
}

/// Wrap records the way resource-envelope endpoints deliver them.
pub fn wrap_in_res(records: Vec<UserRecord>) -> Vec<WireUser> {
    records
        .into_iter()
        .map(|resource| WireUser::Wrapped { resource })
        .collect()
}

/// Register a counting observer on the store.
pub fn notify_counter(store: &mut UserStore) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    store.add_change_listener(move || counter.set(counter.get() + 1));
    count
}
