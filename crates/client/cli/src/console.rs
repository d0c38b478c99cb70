//! Terminal implementations of the game-core I/O seams.

use std::io::{BufRead, Write};

use game_core::{EventSink, GameEvent, SelectionPrompt, SelectionSource};

use crate::config::UiConfig;
use crate::presentation;

/// Reads selection lines from `input` after printing the menu to `output`.
pub struct ConsoleSelection<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSelection<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> SelectionSource for ConsoleSelection<R, W> {
    fn next_line(&mut self, prompt: &SelectionPrompt<'_>) -> std::io::Result<Option<String>> {
        presentation::write_menu(&mut self.output, prompt)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Finish the dangling prompt line before the caller reports EOF.
            writeln!(self.output)?;
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD and are rejected as tokens later.
        let line = String::from_utf8_lossy(&buf).into_owned();
        tracing::debug!(line = line.trim_end(), "Selection input");
        Ok(Some(line))
    }
}

/// Prints every event as one line and mirrors it to the log.
pub struct ConsoleSink<W> {
    output: W,
    ui: UiConfig,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(output: W, ui: UiConfig) -> Self {
        Self { output, ui }
    }

    fn is_visible(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::RoundStarted { .. } => self.ui.show_rounds,
            _ => true,
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: GameEvent) {
        if event.is_rejection() {
            tracing::warn!(%event, "Selection rejected");
        } else {
            tracing::debug!(%event, "Game event");
        }

        if !self.is_visible(&event) {
            return;
        }
        if let Err(e) = writeln!(self.output, "{event}") {
            tracing::warn!("Failed to write event to console: {}", e);
        }
    }
}
