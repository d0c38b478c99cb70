//! Whole console sessions driven through in-memory buffers.

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use autochess_cli::{App, SessionOutcome, UiConfig};
use game_content::{ContentFactory, GameContent};
use game_core::{BattleOutcome, BattleReport, GameConfig, UnitTemplate};

/// Writer whose clones all append to the same buffer, like two handles to
/// one terminal.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn duel_content() -> GameContent {
    GameContent {
        heroes: vec![UnitTemplate::soldier("Champion", 100, 50)],
        enemies: vec![UnitTemplate::soldier("Grunt", 40, 5)],
        config: GameConfig::default(),
    }
}

fn play(app: &App, input: &str) -> (SessionOutcome, String, String) {
    let mut menu = Vec::new();
    let mut log = Vec::new();
    let outcome = app
        .run(Cursor::new(input.to_owned()), &mut menu, &mut log)
        .unwrap();
    (
        outcome,
        String::from_utf8(menu).unwrap(),
        String::from_utf8(log).unwrap(),
    )
}

#[test]
fn recruit_and_win() {
    let app = App::new(duel_content(), UiConfig::default());

    let (outcome, menu, log) = play(&app, "1\nstart\n");

    assert_eq!(
        outcome,
        SessionOutcome::Finished(BattleReport {
            outcome: BattleOutcome::PlayerWon,
            rounds: 1,
        })
    );
    assert!(menu.contains("Grunt (soldier, Health: 40, Damage: 5)"));
    assert!(menu.contains("1. Champion (soldier, Health: 100, Damage: 50)\n"));
    assert!(menu.contains("1. Champion (soldier, Health: 100, Damage: 50) [in team]\n"));
    assert_eq!(
        log,
        "Champion joined your team. You have 200 coins left.\n\
         The battle has begun!\n\
         --- Round 1 ---\n\
         Champion strikes Grunt for 50 damage!\n\
         Grunt has fallen.\n\
         You won!\n\
         Battle finished after 1 rounds.\n\
         Your survivors: Champion\n\
         Enemy survivors: none\n"
    );
}

#[test]
fn invalid_lines_are_reported_and_recruitment_continues() {
    let app = App::new(duel_content(), UiConfig { show_rounds: false });

    let (outcome, _, log) = play(&app, "abc, 9\nSTART\n1, 1\n  start  \n");

    assert!(matches!(outcome, SessionOutcome::Finished(_)));
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        &lines[..5],
        [
            "Invalid choice: 'abc' (not a number). Please try again.",
            "Invalid choice: '9' (index 9 is outside 1..=1). Please try again.",
            "You must select at least one hero before the battle starts.",
            "Champion joined your team. You have 200 coins left.",
            "Champion is already in your team.",
        ]
    );
    assert!(!log.contains("--- Round"));
}

#[test]
fn undecodable_line_is_rejected_like_any_other_token() {
    let app = App::new(duel_content(), UiConfig::default());
    let mut menu = Vec::new();
    let mut log = Vec::new();

    let outcome = app
        .run(Cursor::new(&b"\xff\xfe\n1\nstart\n"[..]), &mut menu, &mut log)
        .unwrap();

    assert!(matches!(outcome, SessionOutcome::Finished(_)));
    let log = String::from_utf8(log).unwrap();
    assert!(log.starts_with(
        "Invalid choice: '\u{FFFD}\u{FFFD}' (not a number). Please try again.\n\
         Champion joined your team."
    ));
    assert!(log.contains("You won!"));
}

#[test]
fn closed_input_abandons_the_session() {
    let app = App::new(duel_content(), UiConfig::default());

    let (outcome, _, log) = play(&app, "1\n");

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(log.contains("Champion joined your team."));
    assert!(!log.contains("The battle has begun!"));
}

#[test]
fn money_runs_out_after_five_recruits() {
    let content = GameContent {
        heroes: (1..=6)
            .map(|n| UnitTemplate::soldier(format!("Recruit {n}"), 10, 1))
            .collect(),
        enemies: vec![UnitTemplate::soldier("Grunt", 1, 0)],
        config: GameConfig::default(),
    };
    let app = App::new(content, UiConfig::default());

    let (_, _, log) = play(&app, "1,2,3,4,5,6\nstart\n");

    assert!(log.contains("Recruit 5 joined your team. You have 0 coins left."));
    assert!(log.contains(
        "Cannot recruit Recruit 6: Not enough money (needed: 50, available: 0)."
    ));
}

#[test]
fn builtin_session_reaches_a_verdict_on_one_terminal() {
    let content = ContentFactory::builtin().load().unwrap();
    let app = App::new(content, UiConfig::default());
    let terminal = SharedBuffer::default();

    let outcome = app
        .run(
            Cursor::new("1, 2, 3, 4, 5\nstart\n"),
            terminal.clone(),
            terminal.clone(),
        )
        .unwrap();

    let transcript = terminal.contents();
    assert!(matches!(outcome, SessionOutcome::Finished(_)));
    assert!(transcript.contains("Enemy Dragon 2"));
    assert!(transcript.contains("Dragon 2 joined your team. You have 0 coins left."));
    // The menu and prompt come before the events they triggered.
    let prompt = transcript.find("Your choice: ").unwrap();
    let joined = transcript.find("Warrior 1 joined your team.").unwrap();
    assert!(prompt < joined);
    assert!(transcript.contains("You won!") || transcript.contains("You lost."));
}
