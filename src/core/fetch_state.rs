//! Per-store fetch flags.
//!
//! Idle -> Fetching (on any fetch action) -> Fetched (on the matching
//! received action) -> Fetching (on a new fetch). `error` is set only by
//! explicit error actions; a later successful fetch does NOT clear it
//! unless the store is configured to (`clear_error_on_refetch`).

use super::error::ApiError;

/// Load status for the store as a whole, not tied to any one entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchState {
    fetching: bool,
    fetched: bool,
    error: Option<ApiError>,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch was delegated: in flight, and the previous load no longer
    /// counts as current.
    pub fn begin(&mut self) {
        self.fetching = true;
        self.fetched = false;
    }

    /// The matching response landed.
    pub fn settle(&mut self) {
        self.fetching = false;
        self.fetched = true;
    }

    /// Record a collaborator failure. The in-flight flag settles;
    /// `fetched` is left alone - a failed load is not a completed one.
    pub fn set_error(&mut self, error: ApiError) {
        self.fetching = false;
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn fetching(&self) -> bool {
        self.fetching
    }

    pub fn fetched(&self) -> bool {
        self.fetched
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}
