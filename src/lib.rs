#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod telemetry;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::api::{PlatformApi, PERMISSIONS_CATEGORY_USERS};
pub use crate::core::{
    Action, ApiError, ChangeNotifier, CoreError, CurrentUserInfo, FetchState, Guid, ListenerId,
    MergeMode, RoleName, RoleScope, Roles, ScopeStamp, StoreConfig, UserCollection, UserRecord,
    UserStore, ViewedType, WireUser, merge_entities, merge_list, unwrap_resources,
};
pub use crate::dispatch::{ActionSource, Dispatcher};
