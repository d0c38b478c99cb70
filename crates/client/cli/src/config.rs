//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Console client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory with content overrides (`heroes.ron`, `enemies.ron`, `game.toml`).
    pub content_dir: Option<PathBuf>,
    /// Root directory for session log files.
    pub log_dir: Option<PathBuf>,
    /// Name of the session log directory.
    pub session_id: Option<String>,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AUTOCHESS_CONTENT_DIR` - Content override directory (default: built-in content)
    /// - `AUTOCHESS_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `AUTOCHESS_SESSION_ID` - Session log name (default: `session_<timestamp>`)
    /// - `AUTOCHESS_SHOW_ROUNDS` - Print round separators during battle (default: true)
    pub fn from_env() -> Self {
        let mut config = Self {
            content_dir: read_env::<PathBuf>("AUTOCHESS_CONTENT_DIR"),
            log_dir: read_env::<PathBuf>("AUTOCHESS_LOG_DIR"),
            session_id: read_env::<String>("AUTOCHESS_SESSION_ID"),
            ui: UiConfig::default(),
        };

        if let Some(show) = read_env_bool("AUTOCHESS_SHOW_ROUNDS") {
            config.ui.show_rounds = show;
        }

        config
    }
}

/// Console output settings.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Print a separator line at the start of every battle round.
    pub show_rounds: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_rounds: true }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
