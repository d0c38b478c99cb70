//! Battle loop errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced while running a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// Both sides still had units standing after the configured number of
    /// rounds, typically because no unit deals positive damage.
    #[error("battle still undecided after {limit} rounds")]
    RoundLimitExceeded { limit: u32 },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RoundLimitExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RoundLimitExceeded { .. } => "BATTLE_ROUND_LIMIT_EXCEEDED",
        }
    }
}
