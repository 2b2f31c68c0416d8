//! Field-level merge of incoming partial records.
//!
//! Non-destructive: fields absent from the incoming record are never
//! cleared. Scalar fields are last-write-wins with no timestamp ordering;
//! an older response landing after a newer one overwrites it. That race
//! is accepted behavior - callers that care must discard stale responses.

use tracing::trace;

use super::collection::UserCollection;
use super::record::{ScopeStamp, UserRecord};

/// How role sequences combine during a merge.
///
/// Bulk fetches are authoritative snapshots and replace the sequence
/// wholesale; role-scoped payloads union instead so a partial payload
/// cannot drop memberships it never mentioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeMode {
    Snapshot,
    RoleUnion,
}

/// Merge an incoming partial record into what is already known.
///
/// Absent existing record: the incoming record is taken as-is. Otherwise
/// every field present on the incoming record wins (shallow overwrite),
/// every field absent from it is retained, and role sequences follow
/// `mode`. Returns the merged record and whether it differs from the
/// existing one.
pub fn merge_entities(
    existing: Option<&UserRecord>,
    incoming: UserRecord,
    mode: MergeMode,
) -> (UserRecord, bool) {
    let Some(existing) = existing else {
        return (incoming, true);
    };

    let mut merged = existing.clone();

    if let Some(name) = incoming.name {
        merged.name = Some(name);
    }
    if let Some(email) = incoming.email {
        merged.email = Some(email);
    }
    if let Some(org_guid) = incoming.org_guid {
        merged.org_guid = Some(org_guid);
    }
    if let Some(space_guid) = incoming.space_guid {
        merged.space_guid = Some(space_guid);
    }

    merge_roles(&mut merged.organization_roles, incoming.organization_roles, mode);
    merge_roles(&mut merged.space_roles, incoming.space_roles, mode);

    let changed = merged != *existing;
    (merged, changed)
}

fn merge_roles(
    existing: &mut Option<super::roles::Roles>,
    incoming: Option<super::roles::Roles>,
    mode: MergeMode,
) {
    let Some(incoming) = incoming else {
        return;
    };
    match (mode, existing.as_mut()) {
        (MergeMode::RoleUnion, Some(current)) => {
            current.union_with(&incoming);
        }
        _ => *existing = Some(incoming),
    }
}

/// Merge a payload of records into the collection, stamping each merged
/// record with the fetch's scope guids. Returns true when any record was
/// inserted or changed.
pub fn merge_list(
    collection: &mut UserCollection,
    incoming: Vec<UserRecord>,
    mode: MergeMode,
    scope: &ScopeStamp,
) -> bool {
    let mut changed = false;
    for record in incoming {
        let guid = record.guid.clone();
        let (mut merged, record_changed) = merge_entities(collection.get(&guid), record, mode);
        let stamped = scope.apply_to(&mut merged);
        if record_changed || stamped {
            trace!(guid = %guid, "merged user record");
            collection.push(merged);
            changed = true;
        }
    }
    changed
}
