use thiserror::Error;

use crate::config::ConfigError;
use crate::core::{ApiError, CoreError};

/// Crate-level convenience error.
///
/// A thin wrapper over the canonical errors; the store itself never
/// raises across its boundary - dispatch handling is total.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
