//! Keyed user collection.
//!
//! INVARIANT: at most one record per guid (identity uniqueness).
//! Iteration follows insertion order.

use std::collections::BTreeMap;

use super::identity::Guid;
use super::record::UserRecord;

/// In-memory keyed set of known user records.
///
/// `push` overwrites without merging; merge semantics live in the merge
/// engine. Reads hand out snapshots of the current state only.
#[derive(Clone, Debug, Default)]
pub struct UserCollection {
    by_guid: BTreeMap<Guid, UserRecord>,
    order: Vec<Guid>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, guid: &Guid) -> Option<&UserRecord> {
        self.by_guid.get(guid)
    }

    pub fn get_mut(&mut self, guid: &Guid) -> Option<&mut UserRecord> {
        self.by_guid.get_mut(guid)
    }

    pub fn contains(&self, guid: &Guid) -> bool {
        self.by_guid.contains_key(guid)
    }

    /// Insert or overwrite, no merging.
    pub fn push(&mut self, record: UserRecord) {
        let guid = record.guid.clone();
        if self.by_guid.insert(guid.clone(), record).is_none() {
            self.order.push(guid);
        }
    }

    /// Remove by guid. Returns true when a record was actually removed.
    pub fn remove(&mut self, guid: &Guid) -> bool {
        if self.by_guid.remove(guid).is_none() {
            return false;
        }
        self.order.retain(|g| g != guid);
        true
    }

    /// All records in collection order.
    pub fn get_all(&self) -> Vec<&UserRecord> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.order
            .iter()
            .filter_map(move |guid| self.by_guid.get(guid))
    }

    pub fn len(&self) -> usize {
        self.by_guid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_guid.is_empty()
    }
}
