//! Game events and the sink they are delivered to.
//!
//! Events are the only output of game-core. Their `Display` form is the
//! human-readable log line shown to the player; front ends are free to render
//! them differently or to log them.

use std::fmt;

use crate::battle::BattleOutcome;
use crate::recruitment::SelectionError;
use crate::state::StateError;
use crate::unit::{UnitId, UnitKind};

/// High-level occurrences during recruitment and battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A candidate joined the player roster and the fee was charged.
    Recruited {
        unit: UnitId,
        name: String,
        money_left: u32,
    },

    /// The selected candidate is already in the player roster.
    AlreadyRecruited { name: String },

    /// The candidate could not be paid for and was not added.
    RecruitmentRejected { name: String, error: StateError },

    /// One token of a selection line could not be used.
    InvalidSelection {
        token: String,
        error: SelectionError,
    },

    /// The start command arrived while the player roster had nobody alive.
    NoHeroesSelected,

    BattleStarted,

    RoundStarted { round: u32 },

    /// A unit attacked another. Emitted before the damage lands.
    UnitAttacked {
        attacker: String,
        kind: UnitKind,
        target: String,
        damage: i32,
    },

    /// A unit's health reached zero or below.
    UnitDefeated { unit: UnitId, name: String },

    BattleEnded { outcome: BattleOutcome, rounds: u32 },
}

impl GameEvent {
    /// True for events that report rejected player input.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRecruited { .. }
                | Self::RecruitmentRejected { .. }
                | Self::InvalidSelection { .. }
                | Self::NoHeroesSelected
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recruited {
                name, money_left, ..
            } => write!(
                f,
                "{name} joined your team. You have {money_left} coins left."
            ),
            Self::AlreadyRecruited { name } => write!(f, "{name} is already in your team."),
            Self::RecruitmentRejected { name, error } => {
                write!(f, "Cannot recruit {name}: {error}.")
            }
            Self::InvalidSelection { token, error } => {
                write!(f, "Invalid choice: '{token}' ({error}). Please try again.")
            }
            Self::NoHeroesSelected => {
                f.write_str("You must select at least one hero before the battle starts.")
            }
            Self::BattleStarted => f.write_str("The battle has begun!"),
            Self::RoundStarted { round } => write!(f, "--- Round {round} ---"),
            Self::UnitAttacked {
                attacker,
                kind,
                target,
                damage,
            } => f.write_str(&kind.describe_attack(attacker, target, *damage)),
            Self::UnitDefeated { name, .. } => write!(f, "{name} has fallen."),
            Self::BattleEnded { outcome, .. } => match outcome {
                BattleOutcome::PlayerWon => f.write_str("You won!"),
                BattleOutcome::EnemyWon => f.write_str("You lost."),
            },
        }
    }
}

/// One-way receiver of game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Collects events in order; used by tests and by callers that inspect a
/// whole battle after the fact.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_lines_are_readable() {
        let rejected = GameEvent::RecruitmentRejected {
            name: "Dragon 2".into(),
            error: StateError::InsufficientFunds {
                requested: 50,
                available: 0,
            },
        };
        assert!(rejected.is_rejection());
        assert_eq!(
            rejected.to_string(),
            "Cannot recruit Dragon 2: Not enough money (needed: 50, available: 0)."
        );

        let invalid = GameEvent::InvalidSelection {
            token: "7".into(),
            error: SelectionError::OutOfRange { index: 7, max: 5 },
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid choice: '7' (index 7 is outside 1..=5). Please try again."
        );
    }

    #[test]
    fn outcome_lines() {
        let won = GameEvent::BattleEnded {
            outcome: BattleOutcome::PlayerWon,
            rounds: 3,
        };
        let lost = GameEvent::BattleEnded {
            outcome: BattleOutcome::EnemyWon,
            rounds: 3,
        };
        assert_eq!(won.to_string(), "You won!");
        assert_eq!(lost.to_string(), "You lost.");
        assert!(!won.is_rejection());
    }
}
