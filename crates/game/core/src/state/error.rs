//! Battle state errors.
//!
//! Errors related to currency bookkeeping and unit identity allocation.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur during battle state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Deduction larger than the current balance. The balance is left untouched.
    #[error("Not enough money (needed: {requested}, available: {available})")]
    InsufficientFunds {
        /// Amount the caller tried to deduct.
        requested: u32,
        /// Balance at the time of the attempt.
        available: u32,
    },

    /// Unit ID allocation overflow (all IDs exhausted).
    #[error("Unit ID overflow (current: {current})")]
    UnitIdOverflow {
        /// Current ID value when overflow occurred.
        current: u32,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            // The player can still pick cheaper options or start the battle
            InsufficientFunds { .. } => ErrorSeverity::Recoverable,

            // ID overflow is a fatal error - cannot continue
            UnitIdOverflow { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            InsufficientFunds { .. } => "STATE_INSUFFICIENT_FUNDS",
            UnitIdOverflow { .. } => "STATE_UNIT_ID_OVERFLOW",
        }
    }
}
