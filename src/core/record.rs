//! User entity record.
//!
//! A record accumulates optional fields over its lifetime as overlapping
//! partial payloads arrive. Only `guid` is required.

use serde::{Deserialize, Serialize};

use super::identity::Guid;
use super::roles::{RoleScope, Roles};

/// One user as known to the store.
///
/// Fields other than `guid` are optional and fill in as fetch responses
/// and confirmed mutations land. Field names follow the wire payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub guid: Guid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(
        default,
        rename = "orgGuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub org_guid: Option<Guid>,

    #[serde(
        default,
        rename = "spaceGuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub space_guid: Option<Guid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_roles: Option<Roles>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_roles: Option<Roles>,
}

impl UserRecord {
    pub fn new(guid: Guid) -> Self {
        Self {
            guid,
            name: None,
            email: None,
            org_guid: None,
            space_guid: None,
            organization_roles: None,
            space_roles: None,
        }
    }

    /// Role sequence for a scope, if the record carries that field.
    pub fn roles(&self, scope: RoleScope) -> Option<&Roles> {
        match scope {
            RoleScope::Org => self.organization_roles.as_ref(),
            RoleScope::Space => self.space_roles.as_ref(),
        }
    }

    /// Role sequence for a scope, creating the field when absent.
    pub fn roles_mut(&mut self, scope: RoleScope) -> &mut Roles {
        let slot = match scope {
            RoleScope::Org => &mut self.organization_roles,
            RoleScope::Space => &mut self.space_roles,
        };
        slot.get_or_insert_with(Roles::new)
    }
}

/// Scope guids a fetch was issued for, stamped onto every merged record.
///
/// A space-users fetch knows which org and space it targeted even though
/// the payload records do not carry those fields themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeStamp {
    pub org_guid: Option<Guid>,
    pub space_guid: Option<Guid>,
}

impl ScopeStamp {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn org(org_guid: Guid) -> Self {
        Self {
            org_guid: Some(org_guid),
            space_guid: None,
        }
    }

    pub fn space(org_guid: Option<Guid>, space_guid: Guid) -> Self {
        Self {
            org_guid,
            space_guid: Some(space_guid),
        }
    }

    /// Overwrite the record's scope fields with any guids present here.
    /// Returns true when a field changed.
    pub fn apply_to(&self, record: &mut UserRecord) -> bool {
        let mut changed = false;
        if let Some(org) = &self.org_guid {
            if record.org_guid.as_ref() != Some(org) {
                record.org_guid = Some(org.clone());
                changed = true;
            }
        }
        if let Some(space) = &self.space_guid {
            if record.space_guid.as_ref() != Some(space) {
                record.space_guid = Some(space.clone());
                changed = true;
            }
        }
        changed
    }
}
