//! Recruitment errors.

use crate::error::{ErrorSeverity, GameError};

/// Why one token of a selection line was rejected.
///
/// Reported per token; the remaining tokens of the line are still processed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("not a number")]
    NotANumber,

    #[error("index {index} is outside 1..={max}")]
    OutOfRange { index: i64, max: usize },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotANumber => "SELECTION_NOT_A_NUMBER",
            Self::OutOfRange { .. } => "SELECTION_OUT_OF_RANGE",
        }
    }
}

/// Errors that end the recruitment flow before the player is ready.
#[derive(Debug, thiserror::Error)]
pub enum RecruitmentError {
    #[error("selection input closed before the battle was started")]
    InputClosed,

    #[error("failed to read selection input: {0}")]
    Input(#[from] std::io::Error),
}

impl GameError for RecruitmentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InputClosed => "RECRUITMENT_INPUT_CLOSED",
            Self::Input(_) => "RECRUITMENT_INPUT",
        }
    }
}
