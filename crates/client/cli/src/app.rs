//! One console session: recruitment followed by the battle.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use game_content::GameContent;
use game_core::{
    BattleLoop, BattleReport, BattleState, GameError, RecruitmentError, RecruitmentFlow,
    RecruitmentPool,
};

use crate::config::UiConfig;
use crate::console::{ConsoleSelection, ConsoleSink};
use crate::presentation;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The battle ran to completion.
    Finished(BattleReport),
    /// Selection input closed before the player started the battle.
    Abandoned,
}

/// Console session runner.
pub struct App {
    content: GameContent,
    ui: UiConfig,
}

impl App {
    pub fn new(content: GameContent, ui: UiConfig) -> Self {
        Self { content, ui }
    }

    /// Plays one session.
    ///
    /// `menu` receives the intro, recruitment menus and prompts; `log`
    /// receives event lines and the final summary. Both may point at the same
    /// terminal.
    pub fn run(
        &self,
        input: impl BufRead,
        mut menu: impl Write,
        mut log: impl Write,
    ) -> Result<SessionOutcome> {
        let config = &self.content.config;
        let mut state = BattleState::new(config);

        for template in &self.content.enemies {
            state
                .spawn_enemy(template)
                .with_context(|| format!("Failed to spawn enemy {}", template.name))?;
        }
        let pool = RecruitmentPool::from_templates(&mut state, &self.content.heroes)
            .context("Failed to build recruitment pool")?;
        tracing::info!(
            enemies = state.enemy().len(),
            candidates = pool.len(),
            money = state.money(),
            "Session prepared"
        );

        presentation::write_enemy_team(&mut menu, state.enemy())?;
        presentation::write_intro(&mut menu)?;

        let mut sink = ConsoleSink::new(&mut log, self.ui.clone());
        let mut source = ConsoleSelection::new(input, &mut menu);
        let mut flow = RecruitmentFlow::new(&pool, config);

        match flow.run(&mut state, &mut source, &mut sink) {
            Ok(()) => {}
            Err(RecruitmentError::InputClosed) => {
                tracing::info!(
                    recruited = state.player().len(),
                    "Selection input closed before the battle"
                );
                return Ok(SessionOutcome::Abandoned);
            }
            Err(e) => {
                tracing::error!(code = e.error_code(), "Recruitment failed: {}", e);
                return Err(e).context("Recruitment failed");
            }
        }
        tracing::info!(
            team = state.player().len(),
            money = state.money(),
            "Recruitment finished"
        );

        let report = BattleLoop::new(config)
            .run(&mut state, &mut sink)
            .context("Battle did not finish")?;
        drop(sink);
        tracing::info!(
            outcome = %report.outcome,
            rounds = report.rounds,
            "Battle finished"
        );

        presentation::write_summary(&mut log, &state, &report)?;
        log.flush()?;
        Ok(SessionOutcome::Finished(report))
    }
}
