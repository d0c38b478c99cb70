//! Text rendering for menus and summaries.

use std::io::{self, Write};

use game_core::{BattleReport, BattleState, Roster, SelectionPrompt, Unit};

pub const CHOICE_PROMPT: &str = "Your choice: ";

pub fn write_enemy_team(out: &mut impl Write, enemy: &Roster) -> io::Result<()> {
    writeln!(out, "The enemy team has assembled:")?;
    for unit in enemy.iter() {
        writeln!(out, "  {}", describe(unit))?;
    }
    Ok(())
}

pub fn write_intro(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Choose heroes for your team (enter hero numbers separated by commas, \
         or 'start' to begin the battle):"
    )
}

/// Recruitment menu followed by the input prompt.
pub fn write_menu(out: &mut impl Write, prompt: &SelectionPrompt<'_>) -> io::Result<()> {
    for (position, candidate) in prompt.candidates.iter().enumerate() {
        let marker = if prompt.is_recruited(position) {
            " [in team]"
        } else {
            ""
        };
        writeln!(out, "{}. {}{}", position + 1, describe(candidate), marker)?;
    }
    writeln!(
        out,
        "You have {} coins. Each hero costs {} coins.",
        prompt.money, prompt.hero_cost
    )?;
    write!(out, "{CHOICE_PROMPT}")?;
    out.flush()
}

/// Survivors of both sides after the battle.
pub fn write_summary(
    out: &mut impl Write,
    state: &BattleState,
    report: &BattleReport,
) -> io::Result<()> {
    writeln!(out, "Battle finished after {} rounds.", report.rounds)?;
    let sides = [
        ("Your survivors", state.player()),
        ("Enemy survivors", state.enemy()),
    ];
    for (label, roster) in sides {
        let survivors: Vec<&str> = roster.alive_units().into_iter().map(Unit::name).collect();
        if survivors.is_empty() {
            writeln!(out, "{label}: none")?;
        } else {
            writeln!(out, "{label}: {}", survivors.join(", "))?;
        }
    }
    Ok(())
}

fn describe(unit: &Unit) -> String {
    format!(
        "{} ({}, Health: {}, Damage: {})",
        unit.name(),
        unit.kind(),
        unit.health(),
        unit.damage()
    )
}
