//! Deterministic auto-battler rules shared across clients.
//!
//! `game-core` defines the canonical rules (units, rosters, recruitment and the
//! battle loop) and exposes pure APIs. Nothing here reads input or writes
//! output directly: selection lines arrive through [`SelectionSource`] and
//! every observable occurrence leaves through an [`EventSink`] as a
//! [`GameEvent`].
pub mod battle;
pub mod config;
pub mod error;
pub mod event;
pub mod recruitment;
pub mod roster;
pub mod state;
pub mod unit;

pub use battle::{BattleError, BattleLoop, BattleOutcome, BattlePhase, BattleReport};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use event::{EventSink, GameEvent};
pub use recruitment::{
    RecruitmentError, RecruitmentFlow, RecruitmentPhase, RecruitmentPool, START_COMMAND,
    ScriptedSelection, SelectionError, SelectionInput, SelectionPrompt, SelectionSource,
};
pub use roster::Roster;
pub use state::{BattleState, StateError};
pub use unit::{AttackReport, RecordError, Unit, UnitId, UnitKind, UnitRecord, UnitTemplate};
