//! Identity atoms
//!
//! Guid: stable entity identity assigned by the platform
//! RoleName: role membership name within an org or space

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidGuid, InvalidRole};

/// Platform-assigned guid - non-empty, no whitespace.
///
/// Guids are opaque to this crate; the server is the only mint. Parsing
/// rejects strings that could not have come off the wire intact.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guid(String);

impl Guid {
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidGuid {
                raw: s,
                reason: "empty".into(),
            }
            .into());
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidGuid {
                raw: s,
                reason: "cannot contain whitespace".into(),
            }
            .into());
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({:?})", self.0)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Guid {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Guid::parse(s)
    }
}

impl From<Guid> for String {
    fn from(g: Guid) -> String {
        g.0
    }
}

/// Validated role name - non-empty, no newlines.
///
/// Role names are trimmed on parse.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into().trim().to_string();
        if s.is_empty() {
            return Err(InvalidRole {
                raw: s,
                reason: "empty".into(),
            }
            .into());
        }
        if s.contains('\n') || s.contains('\r') {
            return Err(InvalidRole {
                raw: s,
                reason: "cannot contain newlines".into(),
            }
            .into());
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoleName({:?})", self.0)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RoleName {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        RoleName::parse(s)
    }
}

impl From<RoleName> for String {
    fn from(r: RoleName) -> String {
        r.0
    }
}
