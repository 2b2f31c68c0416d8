//! Canonical core errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid guid string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid guid {raw:?}: {reason}")]
pub struct InvalidGuid {
    pub raw: String,
    pub reason: String,
}

/// Invalid role name string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role {raw:?}: {reason}")]
pub struct InvalidRole {
    pub raw: String,
    pub reason: String,
}

/// Validation errors for core domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Guid(#[from] InvalidGuid),

    #[error(transparent)]
    Role(#[from] InvalidRole),
}

/// Server-reported failure record, surfaced to views through the store.
///
/// Carried on error actions and held in fetch state. The store never
/// inspects transport details beyond this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{description}")]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    pub description: String,
}

impl ApiError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            code: None,
            description: description.into(),
        }
    }

    pub fn with_code(code: u32, description: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            description: description.into(),
        }
    }
}
