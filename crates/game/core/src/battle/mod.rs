//! Automatic battle resolution.
//!
//! A battle is a sequence of rounds. In every round each player unit that was
//! alive when the round began attacks, in roster order, followed by each enemy
//! unit alive when the round began. Every attack targets the first unit still
//! alive in the opposing roster at the moment it lands, so a unit killed early
//! in the round is never hit again. Attackers that died earlier in the same
//! round do nothing.
//!
//! The loop continues while both rosters have someone standing. The player
//! wins iff at least one player unit is alive at the end; any other ending,
//! including one where neither side has survivors, is a loss.
mod error;

pub use error::BattleError;

use crate::config::GameConfig;
use crate::event::{EventSink, GameEvent};
use crate::roster::Roster;
use crate::state::BattleState;
use crate::unit::UnitId;

/// Final result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    PlayerWon,
    EnemyWon,
}

impl BattleOutcome {
    /// Applies the end-of-battle rule to the current rosters.
    pub fn decide(state: &BattleState) -> Self {
        if state.player().alive_count() > 0 {
            Self::PlayerWon
        } else {
            Self::EnemyWon
        }
    }
}

/// States of the battle loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    InProgress,
    Finished(BattleOutcome),
}

impl BattlePhase {
    /// Phase implied by the rosters: in progress while both sides have an
    /// alive unit.
    pub fn of(state: &BattleState) -> Self {
        if state.player().is_defeated() || state.enemy().is_defeated() {
            Self::Finished(BattleOutcome::decide(state))
        } else {
            Self::InProgress
        }
    }
}

/// Summary of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub rounds: u32,
}

/// Round-by-round battle driver.
#[derive(Clone, Debug)]
pub struct BattleLoop {
    max_rounds: u32,
    rounds: u32,
}

impl BattleLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            max_rounds: config.max_rounds,
            rounds: 0,
        }
    }

    /// Rounds resolved so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Fights until one side has no alive unit.
    ///
    /// # Errors
    ///
    /// Returns `BattleError::RoundLimitExceeded` if the battle is still in
    /// progress after the configured number of rounds.
    pub fn run(
        &mut self,
        state: &mut BattleState,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<BattleReport, BattleError> {
        sink.emit(GameEvent::BattleStarted);

        let outcome = loop {
            match BattlePhase::of(state) {
                BattlePhase::Finished(outcome) => break outcome,
                BattlePhase::InProgress if self.rounds >= self.max_rounds => {
                    return Err(BattleError::RoundLimitExceeded {
                        limit: self.max_rounds,
                    });
                }
                BattlePhase::InProgress => {
                    self.resolve_round(state, sink);
                }
            }
        };

        sink.emit(GameEvent::BattleEnded {
            outcome,
            rounds: self.rounds,
        });
        Ok(BattleReport {
            outcome,
            rounds: self.rounds,
        })
    }

    /// Resolves exactly one round and returns the phase it leaves behind.
    pub fn resolve_round(
        &mut self,
        state: &mut BattleState,
        sink: &mut (impl EventSink + ?Sized),
    ) -> BattlePhase {
        self.rounds += 1;
        sink.emit(GameEvent::RoundStarted { round: self.rounds });

        let (player, enemy) = state.rosters_mut();
        let player_attackers = player.alive_ids();
        let enemy_attackers = enemy.alive_ids();

        volley(&player_attackers, player, enemy, sink);
        volley(&enemy_attackers, enemy, player, sink);

        BattlePhase::of(state)
    }
}

/// Every listed attacker hits the first alive defender, re-resolved per attack.
fn volley(
    attackers: &[UnitId],
    attacking: &Roster,
    defending: &mut Roster,
    sink: &mut (impl EventSink + ?Sized),
) {
    for &id in attackers {
        let Some(attacker) = attacking.get(id) else {
            continue;
        };
        let Some(target) = defending.first_alive_mut() else {
            break;
        };
        attacker.attack(Some(target), sink);
    }
}
