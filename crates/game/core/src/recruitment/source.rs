//! Where selection lines come from.

use std::collections::VecDeque;

use crate::roster::Roster;
use crate::unit::Unit;

/// Context handed to a [`SelectionSource`] with every request, enough for a
/// front end to render the recruitment menu.
#[derive(Clone, Copy, Debug)]
pub struct SelectionPrompt<'a> {
    pub candidates: &'a [Unit],
    pub team: &'a Roster,
    pub money: u32,
    pub hero_cost: u32,
}

impl SelectionPrompt<'_> {
    /// Whether the candidate at `position` (0-based) already joined the team.
    pub fn is_recruited(&self, position: usize) -> bool {
        self.candidates
            .get(position)
            .is_some_and(|candidate| self.team.contains(candidate.id()))
    }
}

/// Blocking request/response channel for selection input.
pub trait SelectionSource {
    /// Returns the next line, or `None` once input is exhausted.
    fn next_line(&mut self, prompt: &SelectionPrompt<'_>) -> std::io::Result<Option<String>>;
}

/// Replays a fixed list of lines.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSelection {
    lines: VecDeque<String>,
    prompts: usize,
}

impl ScriptedSelection {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: 0,
        }
    }

    /// Number of lines requested so far, including the one that found the
    /// script exhausted.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl SelectionSource for ScriptedSelection {
    fn next_line(&mut self, _prompt: &SelectionPrompt<'_>) -> std::io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.lines.pop_front())
    }
}
