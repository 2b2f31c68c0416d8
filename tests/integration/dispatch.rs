//! Dispatch pipeline: action in, collaborator calls out, observers
//! notified per the store's rules.

use deckhand::{Action, ApiError, Dispatcher, RoleScope, UserStore, WireUser};

use crate::fixtures::{guid, notify_counter, role, user, wrap_in_res, ApiCall, RecordingApi};

fn dispatcher() -> (Dispatcher<RecordingApi>, RecordingApi) {
    let api = RecordingApi::new();
    (Dispatcher::new(UserStore::new(), api.clone()), api)
}

#[test]
fn space_users_fetch_delegates_to_collaborator() {
    let (mut dispatcher, api) = dispatcher();

    dispatcher.handle_view_action(Action::SpaceUsersFetch {
        space_guid: guid("axckzvjxcov"),
    });

    assert_eq!(
        api.calls(),
        vec![ApiCall::FetchSpaceUsers {
            space_guid: "axckzvjxcov".into()
        }]
    );
    assert!(dispatcher.store().fetching());
    assert!(!dispatcher.store().fetched());
}

#[test]
fn org_users_fetch_delegates_to_collaborator() {
    let (mut dispatcher, api) = dispatcher();

    dispatcher.handle_view_action(Action::OrgUsersFetch {
        org_guid: guid("axckzvjxcov"),
    });

    assert_eq!(
        api.calls(),
        vec![ApiCall::FetchOrgUsers {
            org_guid: "axckzvjxcov".into()
        }]
    );
}

#[test]
fn org_user_roles_fetch_delegates_and_flags() {
    let (mut dispatcher, api) = dispatcher();

    dispatcher.handle_view_action(Action::OrgUserRolesFetch {
        org_guid: guid("axckzvjxcov"),
    });

    assert_eq!(
        api.calls(),
        vec![ApiCall::FetchOrgUserRoles {
            org_guid: "axckzvjxcov".into()
        }]
    );
    assert!(dispatcher.store().fetching());
}

#[test]
fn fetch_then_received_settles_and_notifies_once() {
    let (mut dispatcher, _api) = dispatcher();
    let notified = notify_counter(dispatcher.store_mut());

    dispatcher.handle_view_action(Action::SpaceUsersFetch {
        space_guid: guid("axckzvjxcov"),
    });
    assert_eq!(notified.get(), 0, "fetch-state transition is not notified");

    dispatcher.handle_server_action(Action::SpaceUsersReceived {
        users: wrap_in_res(vec![user("adsfa")]),
        org_guid: None,
        space_guid: None,
    });

    assert_eq!(notified.get(), 1);
    assert!(!dispatcher.store().fetching());
    assert!(dispatcher.store().fetched());
}

#[test]
fn received_payload_is_unwrapped_merged_and_stamped() {
    let (mut dispatcher, _api) = dispatcher();

    let mut seeded = user("wpqoifesadkzcvn");
    seeded.name = Some("Michael".into());
    dispatcher.store_mut().push(seeded);

    let mut incoming = user("wpqoifesadkzcvn");
    incoming.email = Some("michael@gsa.gov".into());

    dispatcher.handle_server_action(Action::SpaceUsersReceived {
        users: wrap_in_res(vec![incoming]),
        org_guid: Some(guid("a09dsfuva")),
        space_guid: None,
    });

    let stored = dispatcher.store().get(&guid("wpqoifesadkzcvn")).unwrap();
    assert_eq!(stored.name.as_deref(), Some("Michael"));
    assert_eq!(stored.email.as_deref(), Some("michael@gsa.gov"));
    assert_eq!(stored.org_guid.as_ref().unwrap().as_str(), "a09dsfuva");
}

#[test]
fn bare_and_wrapped_payloads_land_identically() {
    let (mut dispatcher, _api) = dispatcher();

    dispatcher.handle_server_action(Action::OrgUsersReceived {
        users: vec![WireUser::Bare(user("bare"))],
        org_guid: None,
    });
    dispatcher.handle_server_action(Action::OrgUsersReceived {
        users: wrap_in_res(vec![user("wrapped")]),
        org_guid: None,
    });

    assert!(dispatcher.store().get(&guid("bare")).is_some());
    assert!(dispatcher.store().get(&guid("wrapped")).is_some());
}

#[test]
fn delete_user_revokes_permissions_then_deletes() {
    let (mut dispatcher, api) = dispatcher();

    dispatcher.handle_view_action(Action::DeleteUser {
        user_guid: guid("znxvmnzvmz"),
        org_guid: guid("029fjaskdjfalskdna"),
    });

    assert_eq!(
        api.calls(),
        vec![
            ApiCall::DeleteOrgUserPermissions {
                user_guid: "znxvmnzvmz".into(),
                org_guid: "029fjaskdjfalskdna".into(),
                permissions: "users".into(),
            },
            ApiCall::DeleteUser {
                user_guid: "znxvmnzvmz".into(),
                org_guid: "029fjaskdjfalskdna".into(),
            },
        ]
    );
}

#[test]
fn delete_user_skips_delete_when_revoke_fails() {
    let (mut dispatcher, api) = dispatcher();
    api.fail_with(ApiError::new("revoke denied"));
    let notified = notify_counter(dispatcher.store_mut());

    dispatcher.handle_view_action(Action::DeleteUser {
        user_guid: guid("19p83fhasjkdhf"),
        org_guid: guid("zxncmvduhvad"),
    });

    assert_eq!(api.calls().len(), 1, "server delete must not be attempted");
    assert_eq!(notified.get(), 0, "no local state change yet");
}

#[test]
fn deleted_user_removes_record_and_notifies_observers_once() {
    let (mut dispatcher, _api) = dispatcher();
    dispatcher.store_mut().push(user("qpweoiralkfdsj"));
    let first = notify_counter(dispatcher.store_mut());
    let second = notify_counter(dispatcher.store_mut());

    dispatcher.handle_server_action(Action::DeletedUser {
        user_guid: guid("qpweoiralkfdsj"),
        org_guid: guid("alkdfj"),
    });

    assert!(dispatcher.store().get(&guid("qpweoiralkfdsj")).is_none());
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn deleted_user_for_unknown_guid_does_not_notify() {
    let (mut dispatcher, _api) = dispatcher();
    let notified = notify_counter(dispatcher.store_mut());

    dispatcher.handle_server_action(Action::DeletedUser {
        user_guid: guid("asdfljk"),
        org_guid: guid("adlsvjkadfa"),
    });

    assert_eq!(notified.get(), 0);
}

#[test]
fn add_user_roles_grants_then_records_membership() {
    let (mut dispatcher, api) = dispatcher();
    dispatcher.store_mut().push(user("zjkxcvadfzxcvz"));
    let notified = notify_counter(dispatcher.store_mut());

    dispatcher.add_user_roles(
        role("org_manager"),
        guid("zjkxcvadfzxcvz"),
        &guid("zxcvzcxvzxroiter"),
        RoleScope::Org,
    );

    assert_eq!(
        api.calls(),
        vec![ApiCall::PutOrgUserPermissions {
            user_guid: "zjkxcvadfzxcvz".into(),
            org_guid: "zxcvzcxvzxroiter".into(),
            role: "org_manager".into(),
        }]
    );
    let stored = dispatcher.store().get(&guid("zjkxcvadfzxcvz")).unwrap();
    assert!(stored
        .roles(RoleScope::Org)
        .unwrap()
        .contains(&role("org_manager")));
    assert_eq!(notified.get(), 1);
}

#[test]
fn add_user_roles_applies_nothing_when_grant_fails() {
    let (mut dispatcher, api) = dispatcher();
    api.fail_with(ApiError::new("denied"));
    dispatcher.store_mut().push(user("zjkxcvadfzxcvz"));
    let notified = notify_counter(dispatcher.store_mut());

    dispatcher.add_user_roles(
        role("org_manager"),
        guid("zjkxcvadfzxcvz"),
        &guid("zxcvzcxvzxroiter"),
        RoleScope::Org,
    );

    let stored = dispatcher.store().get(&guid("zjkxcvadfzxcvz")).unwrap();
    assert!(stored.roles(RoleScope::Org).is_none(), "not applied optimistically");
    assert_eq!(notified.get(), 0);
}

#[test]
fn delete_user_roles_revokes_then_records_removal() {
    let (mut dispatcher, api) = dispatcher();
    let mut seeded = user("zjkxcvz234asdf");
    seeded
        .roles_mut(RoleScope::Org)
        .insert(role("org_manager"));
    dispatcher.store_mut().push(seeded);

    dispatcher.delete_user_roles(
        role("org_manager"),
        guid("zjkxcvz234asdf"),
        &guid("zxcvzcxvzxroiter"),
        RoleScope::Org,
    );

    assert_eq!(
        api.calls(),
        vec![ApiCall::DeleteOrgUserPermissions {
            user_guid: "zjkxcvz234asdf".into(),
            org_guid: "zxcvzcxvzxroiter".into(),
            permissions: "org_manager".into(),
        }]
    );
    let stored = dispatcher.store().get(&guid("zjkxcvz234asdf")).unwrap();
    assert!(!stored
        .roles(RoleScope::Org)
        .unwrap()
        .contains(&role("org_manager")));
}

#[test]
fn error_remove_user_surfaces_error_record() {
    let (mut dispatcher, _api) = dispatcher();
    let notified = notify_counter(dispatcher.store_mut());

    dispatcher.handle_server_action(Action::ErrorRemoveUser {
        user_guid: guid("asdf"),
        error: ApiError::with_code(10007, "test"),
    });

    assert_eq!(notified.get(), 1);
    let error = dispatcher.store().error().unwrap();
    assert_eq!(error.code, Some(10007));
    assert_eq!(error.description, "test");
}

#[test]
fn identity_uniqueness_holds_across_interleaved_receives() {
    let (mut dispatcher, _api) = dispatcher();

    dispatcher.handle_server_action(Action::SpaceUsersReceived {
        users: wrap_in_res(vec![user("shared"), user("other")]),
        org_guid: None,
        space_guid: Some(guid("space-1")),
    });
    dispatcher.handle_server_action(Action::OrgUsersReceived {
        users: vec![WireUser::Bare(user("shared"))],
        org_guid: Some(guid("org-1")),
    });
    dispatcher.handle_server_action(Action::OrgUserRolesReceived {
        org_user_roles: wrap_in_res(vec![user("shared")]),
        org_guid: None,
    });

    let all = dispatcher.store().get_all();
    let shared: Vec<_> = all
        .iter()
        .filter(|u| u.guid.as_str() == "shared")
        .collect();
    assert_eq!(shared.len(), 1);
    assert_eq!(all.len(), 2);
}

#[test]
fn removed_listener_is_not_notified_again() {
    let (mut dispatcher, _api) = dispatcher();
    let notified = notify_counter(dispatcher.store_mut());
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = std::rc::Rc::clone(&count);
    let id = dispatcher.add_change_listener(move || counter.set(counter.get() + 1));

    dispatcher.handle_server_action(Action::OrgUsersReceived {
        users: vec![],
        org_guid: None,
    });
    assert!(dispatcher.remove_change_listener(id));

    dispatcher.handle_server_action(Action::OrgUsersReceived {
        users: vec![],
        org_guid: None,
    });

    assert_eq!(count.get(), 1);
    assert_eq!(notified.get(), 2);
}
