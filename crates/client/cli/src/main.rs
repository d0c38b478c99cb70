//! Terminal client entry point.
use std::io;

use anyhow::{Context, Result};
use autochess_cli::logging::setup_logging;
use autochess_cli::{App, CliConfig, SessionOutcome};
use game_content::ContentFactory;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    let factory = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::builtin(),
    };
    let content = factory.load().context("Failed to load game content")?;

    let app = App::new(content, config.ui.clone());
    let stdin = io::stdin();
    match app.run(stdin.lock(), io::stdout(), io::stdout())? {
        SessionOutcome::Finished(report) => {
            tracing::info!(outcome = %report.outcome, rounds = report.rounds, "Session ended");
        }
        SessionOutcome::Abandoned => {
            println!("No battle was fought.");
            tracing::info!("Session abandoned");
        }
    }

    Ok(())
}
