//! Role collections
//!
//! Roles: ordered, duplicate-free sequence of role names
//! RoleScope: which resource type a role membership applies to

use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::RoleName;

/// Field names the two role scopes occupy on a user record.
pub const ORG_ROLES_FIELD: &str = "organization_roles";
pub const SPACE_ROLES_FIELD: &str = "space_roles";

/// Resource type a role membership is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleScope {
    Org,
    Space,
}

impl RoleScope {
    /// The record field this scope's role sequence lives in.
    pub fn field_name(self) -> &'static str {
        match self {
            RoleScope::Org => ORG_ROLES_FIELD,
            RoleScope::Space => SPACE_ROLES_FIELD,
        }
    }
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Role sequence - set semantics, insertion order preserved for display.
///
/// Insert of a present role and remove of an absent role are no-ops; both
/// report whether membership actually changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roles(Vec<RoleName>);

impl Roles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append if absent. Returns true when membership changed.
    pub fn insert(&mut self, role: RoleName) -> bool {
        if self.0.contains(&role) {
            return false;
        }
        self.0.push(role);
        true
    }

    /// Remove if present. Returns true when membership changed.
    pub fn remove(&mut self, role: &RoleName) -> bool {
        let before = self.0.len();
        self.0.retain(|r| r != role);
        self.0.len() != before
    }

    pub fn contains(&self, role: &RoleName) -> bool {
        self.0.contains(role)
    }

    /// Union with another sequence, appending unseen roles in their order.
    /// Returns true when membership changed.
    pub fn union_with(&mut self, other: &Roles) -> bool {
        let mut changed = false;
        for role in other.iter() {
            if self.insert(role.clone()) {
                changed = true;
            }
        }
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RoleName> for Roles {
    fn from_iter<T: IntoIterator<Item = RoleName>>(iter: T) -> Self {
        let mut roles = Self::new();
        for role in iter {
            roles.insert(role);
        }
        roles
    }
}
