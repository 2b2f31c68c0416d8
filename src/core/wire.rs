//! Wire payload shapes for received actions.
//!
//! Some endpoints wrap each record in a `{"resource": ...}` envelope,
//! others send records bare. Both must unwrap to the same record before
//! merging.

use serde::{Deserialize, Serialize};

use super::record::UserRecord;

/// A user record as it appears in a fetch response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireUser {
    Wrapped { resource: UserRecord },
    Bare(UserRecord),
}

impl WireUser {
    /// Unwrap the envelope, if any.
    pub fn into_record(self) -> UserRecord {
        match self {
            WireUser::Wrapped { resource } => resource,
            WireUser::Bare(record) => record,
        }
    }
}

impl From<UserRecord> for WireUser {
    fn from(record: UserRecord) -> Self {
        WireUser::Bare(record)
    }
}

/// Unwrap a whole payload sequence.
pub fn unwrap_resources(users: Vec<WireUser>) -> Vec<UserRecord> {
    users.into_iter().map(WireUser::into_record).collect()
}
