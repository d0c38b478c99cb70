//! Console front end for the auto-battler.
//!
//! The game rules live in `game-core`; this crate only connects them to a
//! terminal. Selection lines are read from any `BufRead`, menus and event
//! lines are written to any `Write`, which keeps whole sessions testable with
//! in-memory buffers.

pub mod app;
pub mod config;
pub mod console;
pub mod logging;
pub mod presentation;

pub use app::{App, SessionOutcome};
pub use config::{CliConfig, UiConfig};
pub use console::{ConsoleSelection, ConsoleSink};
