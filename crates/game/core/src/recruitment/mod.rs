//! Recruitment: spending currency to fill the player roster.
//!
//! The flow is a two-state machine. It stays in
//! [`RecruitmentPhase::Selecting`] while lines of selection input arrive and
//! moves to [`RecruitmentPhase::Ready`] only on the start command with at least
//! one alive hero in the player roster.
//!
//! Hiring is atomic: the fee is charged first and the candidate joins the
//! roster only if the charge succeeded, so a failed payment never yields a
//! free unit.
mod error;
mod selection;
mod source;

pub use error::{RecruitmentError, SelectionError};
pub use selection::{START_COMMAND, SelectionInput, parse_index};
pub use source::{ScriptedSelection, SelectionPrompt, SelectionSource};

use crate::config::GameConfig;
use crate::event::{EventSink, GameEvent};
use crate::state::{BattleState, StateError};
use crate::unit::{Unit, UnitTemplate};

/// Fixed, ordered catalog of candidates offered to the player.
///
/// Candidates are not owned by any roster. Hiring one puts a copy with the
/// same [`crate::UnitId`] into the player roster, which is how repeat picks
/// are detected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecruitmentPool {
    candidates: Vec<Unit>,
}

impl RecruitmentPool {
    pub fn new(candidates: Vec<Unit>) -> Self {
        Self { candidates }
    }

    /// Spawns every template under an ID allocated by `state`.
    pub fn from_templates(
        state: &mut BattleState,
        templates: &[UnitTemplate],
    ) -> Result<Self, StateError> {
        let candidates = templates
            .iter()
            .map(|template| state.spawn(template))
            .collect::<Result<_, _>>()?;
        Ok(Self { candidates })
    }

    pub fn candidates(&self) -> &[Unit] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Looks up the candidate named by a 1-based selection token.
    pub fn select(&self, token: &str) -> Result<&Unit, SelectionError> {
        let position = parse_index(token, self.candidates.len())?;
        Ok(&self.candidates[position])
    }
}

/// States of the recruitment flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecruitmentPhase {
    Selecting,
    /// Terminal. The player roster has at least one alive unit.
    Ready,
}

/// Drives recruitment for one battle.
#[derive(Debug)]
pub struct RecruitmentFlow<'a> {
    pool: &'a RecruitmentPool,
    hero_cost: u32,
    phase: RecruitmentPhase,
}

impl<'a> RecruitmentFlow<'a> {
    pub fn new(pool: &'a RecruitmentPool, config: &GameConfig) -> Self {
        Self {
            pool,
            hero_cost: config.hero_cost,
            phase: RecruitmentPhase::Selecting,
        }
    }

    pub fn phase(&self) -> RecruitmentPhase {
        self.phase
    }

    /// Menu context for the next request.
    pub fn prompt<'s>(&'s self, state: &'s BattleState) -> SelectionPrompt<'s> {
        SelectionPrompt {
            candidates: self.pool.candidates(),
            team: state.player(),
            money: state.money(),
            hero_cost: self.hero_cost,
        }
    }

    /// Requests lines from `source` until the player is ready.
    ///
    /// # Errors
    ///
    /// Fails if the source is exhausted or unreadable while still selecting.
    pub fn run(
        &mut self,
        state: &mut BattleState,
        source: &mut (impl SelectionSource + ?Sized),
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<(), RecruitmentError> {
        while self.phase == RecruitmentPhase::Selecting {
            let line = source
                .next_line(&self.prompt(state))?
                .ok_or(RecruitmentError::InputClosed)?;
            self.handle_line(state, &line, sink);
        }
        Ok(())
    }

    /// Applies one line of selection input and returns the resulting phase.
    ///
    /// Lines arriving after the flow is ready are ignored.
    pub fn handle_line(
        &mut self,
        state: &mut BattleState,
        line: &str,
        sink: &mut (impl EventSink + ?Sized),
    ) -> RecruitmentPhase {
        if self.phase == RecruitmentPhase::Ready {
            return self.phase;
        }

        match SelectionInput::parse(line) {
            SelectionInput::Start => {
                if state.player().alive_count() > 0 {
                    self.phase = RecruitmentPhase::Ready;
                } else {
                    sink.emit(GameEvent::NoHeroesSelected);
                }
            }
            SelectionInput::Picks(tokens) => {
                for token in &tokens {
                    self.pick(state, token, sink);
                }
            }
        }

        self.phase
    }

    fn pick(&self, state: &mut BattleState, token: &str, sink: &mut (impl EventSink + ?Sized)) {
        let candidate = match self.pool.select(token) {
            Ok(candidate) => candidate,
            Err(error) => {
                sink.emit(GameEvent::InvalidSelection {
                    token: token.to_owned(),
                    error,
                });
                return;
            }
        };

        if state.player().contains(candidate.id()) {
            sink.emit(GameEvent::AlreadyRecruited {
                name: candidate.name().to_owned(),
            });
            return;
        }

        match state.deduct_money(self.hero_cost) {
            Ok(()) => {
                state.player_mut().add(candidate.clone());
                sink.emit(GameEvent::Recruited {
                    unit: candidate.id(),
                    name: candidate.name().to_owned(),
                    money_left: state.money(),
                });
            }
            Err(error) => sink.emit(GameEvent::RecruitmentRejected {
                name: candidate.name().to_owned(),
                error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitId;

    fn setup() -> (BattleState, RecruitmentPool) {
        let mut state = BattleState::default();
        let pool = RecruitmentPool::from_templates(
            &mut state,
            &[
                UnitTemplate::soldier("Warrior 1", 100, 20),
                UnitTemplate::soldier("Warrior 2", 120, 15),
                UnitTemplate::soldier("Warrior 3", 90, 25),
                UnitTemplate::dragon("Dragon 1", 150, 30),
                UnitTemplate::dragon("Dragon 2", 140, 35),
            ],
        )
        .unwrap();
        (state, pool)
    }

    #[test]
    fn picks_charge_the_fee() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        let phase = flow.handle_line(&mut state, "1, 4", &mut events);

        assert_eq!(phase, RecruitmentPhase::Selecting);
        assert_eq!(state.money(), 150);
        let names: Vec<_> = state.player().iter().map(Unit::name).collect();
        assert_eq!(names, ["Warrior 1", "Dragon 1"]);
        assert_eq!(
            events[1],
            GameEvent::Recruited {
                unit: pool.candidates()[3].id(),
                name: "Dragon 1".into(),
                money_left: 150,
            }
        );
    }

    #[test]
    fn repeated_pick_is_charged_once() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        flow.handle_line(&mut state, "2,2", &mut events);
        flow.handle_line(&mut state, "2", &mut events);

        assert_eq!(state.player().len(), 1);
        assert_eq!(state.money(), 200);
        let repeats = events
            .iter()
            .filter(|event| matches!(event, GameEvent::AlreadyRecruited { .. }))
            .count();
        assert_eq!(repeats, 2);
    }

    #[test]
    fn invalid_tokens_do_not_abort_the_line() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        flow.handle_line(&mut state, "abc, 9, 3", &mut events);

        assert_eq!(
            events[0],
            GameEvent::InvalidSelection {
                token: "abc".into(),
                error: SelectionError::NotANumber,
            }
        );
        assert_eq!(
            events[1],
            GameEvent::InvalidSelection {
                token: "9".into(),
                error: SelectionError::OutOfRange { index: 9, max: 5 },
            }
        );
        assert!(state.player().contains(pool.candidates()[2].id()));
        assert_eq!(state.money(), 200);
    }

    #[test]
    fn unaffordable_hero_is_not_added() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let config = GameConfig::default().with_starting_money(100);
        let mut state_low = BattleState::new(&config);
        let mut flow = RecruitmentFlow::new(&pool, &config);

        flow.handle_line(&mut state_low, "1,2,3", &mut events);

        assert_eq!(state_low.player().len(), 2);
        assert_eq!(state_low.money(), 0);
        assert!(!state_low.player().contains(pool.candidates()[2].id()));
        assert_eq!(
            events.last(),
            Some(&GameEvent::RecruitmentRejected {
                name: "Warrior 3".into(),
                error: StateError::InsufficientFunds {
                    requested: 50,
                    available: 0,
                },
            })
        );

        // The default budget covers all five candidates exactly.
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());
        flow.handle_line(&mut state, "1,2,3,4,5", &mut events);
        assert_eq!(state.player().len(), 5);
        assert_eq!(state.money(), 0);
    }

    #[test]
    fn start_requires_an_alive_hero() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        assert_eq!(
            flow.handle_line(&mut state, "Start", &mut events),
            RecruitmentPhase::Selecting
        );
        assert_eq!(events, [GameEvent::NoHeroesSelected]);

        flow.handle_line(&mut state, "5", &mut events);
        assert_eq!(
            flow.handle_line(&mut state, "START", &mut events),
            RecruitmentPhase::Ready
        );

        // Ready is terminal.
        flow.handle_line(&mut state, "1", &mut events);
        assert_eq!(state.player().len(), 1);
    }

    #[test]
    fn start_with_only_dead_heroes_keeps_selecting() {
        let mut events = Vec::new();
        let pool = RecruitmentPool::new(vec![Unit::soldier(UnitId(0), "Ghost", 0, 5)]);
        let mut state = BattleState::default();
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        flow.handle_line(&mut state, "1", &mut events);
        assert_eq!(state.player().len(), 1);
        assert_eq!(
            flow.handle_line(&mut state, "start", &mut events),
            RecruitmentPhase::Selecting
        );
        assert_eq!(events.last(), Some(&GameEvent::NoHeroesSelected));
    }

    #[test]
    fn run_reads_until_ready() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut source = ScriptedSelection::new(["start", "1,3", "start", "2"]);
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        flow.run(&mut state, &mut source, &mut events).unwrap();

        assert_eq!(flow.phase(), RecruitmentPhase::Ready);
        assert_eq!(source.prompts(), 3);
        assert_eq!(state.player().len(), 2);
    }

    #[test]
    fn run_fails_when_input_closes() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut source = ScriptedSelection::new(["1"]);
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());

        let err = flow.run(&mut state, &mut source, &mut events).unwrap_err();

        assert!(matches!(err, RecruitmentError::InputClosed));
        assert_eq!(flow.phase(), RecruitmentPhase::Selecting);
        assert_eq!(state.player().len(), 1);
    }

    #[test]
    fn prompt_marks_recruited_candidates() {
        let (mut state, pool) = setup();
        let mut events = Vec::new();
        let mut flow = RecruitmentFlow::new(&pool, &GameConfig::default());
        flow.handle_line(&mut state, "2", &mut events);

        let prompt = flow.prompt(&state);
        assert_eq!(prompt.money, 200);
        assert_eq!(prompt.hero_cost, 50);
        assert!(!prompt.is_recruited(0));
        assert!(prompt.is_recruited(1));
        assert!(!prompt.is_recruited(17));
    }
}
