//! Hero state errors.
//!
//! Errors related to hero construction, training transitions, and experience grants.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Status;

/// Errors that occur while constructing or mutating a [`crate::Hero`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroError {
    /// Hero name is empty or whitespace only.
    #[error("hero name must not be empty")]
    InvalidName,

    /// Training requested while the hero is busy.
    #[error("hero cannot start training while {status}")]
    AlreadyTraining {
        /// Status at the time of the request.
        status: Status,
        /// Expedition currently in progress, if any.
        expedition: Option<String>,
    },

    /// Completion or cancellation requested with no training in progress.
    #[error("hero is not training")]
    NotTraining,

    /// Experience amount is negative, non-finite, or too large to resolve.
    #[error("invalid experience amount: {amount}")]
    InvalidExperience {
        /// The rejected amount.
        amount: f64,
    },
}

impl GameError for HeroError {
    fn severity(&self) -> ErrorSeverity {
        use HeroError::*;
        match self {
            // The hero becomes available again once the expedition ends
            AlreadyTraining { .. } => ErrorSeverity::Recoverable,

            InvalidName | NotTraining | InvalidExperience { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use HeroError::*;
        match self {
            InvalidName => "HERO_INVALID_NAME",
            AlreadyTraining { .. } => "HERO_ALREADY_TRAINING",
            NotTraining => "HERO_NOT_TRAINING",
            InvalidExperience { .. } => "HERO_INVALID_EXPERIENCE",
        }
    }
}
