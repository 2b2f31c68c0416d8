//! Core entity-store types
//!
//! Module hierarchy follows type dependency order:
//! - identity: Guid, RoleName
//! - roles: Roles, RoleScope
//! - record: UserRecord, ScopeStamp
//! - wire: payload envelopes
//! - collection: UserCollection
//! - merge: merge_entities, merge_list
//! - fetch_state: FetchState
//! - action: Action, ViewedType
//! - notify: ChangeNotifier
//! - store: UserStore

pub mod action;
pub mod collection;
pub mod error;
pub mod fetch_state;
pub mod identity;
pub mod merge;
pub mod notify;
pub mod record;
pub mod roles;
pub mod store;
pub mod wire;

pub use action::{Action, CurrentUserInfo, ViewedType};
pub use collection::UserCollection;
pub use error::{ApiError, CoreError, InvalidGuid, InvalidRole};
pub use fetch_state::FetchState;
pub use identity::{Guid, RoleName};
pub use merge::{merge_entities, merge_list, MergeMode};
pub use notify::{ChangeNotifier, ListenerId};
pub use record::{ScopeStamp, UserRecord};
pub use roles::{RoleScope, Roles, ORG_ROLES_FIELD, SPACE_ROLES_FIELD};
pub use store::{StoreConfig, UserStore};
pub use wire::{unwrap_resources, WireUser};
