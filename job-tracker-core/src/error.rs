//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use job_tracker_api::ApiError;

use crate::form::FormError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(#[from] FormError),

    /// Remote API failure (converted from the client library)
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected request), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::Config(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
