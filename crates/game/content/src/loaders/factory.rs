//! Content factory for assembling a session's content.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, UnitTemplate};

use crate::builtin::{ENEMIES_FILE, ENEMIES_RON, GAME_FILE, GAME_TOML, HEROES_FILE, HEROES_RON};
use crate::loaders::{ConfigLoader, LoadResult, UnitLoader};

/// Everything a session needs before recruitment starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameContent {
    pub heroes: Vec<UnitTemplate>,
    pub enemies: Vec<UnitTemplate>,
    pub config: GameConfig,
}

impl GameContent {
    /// Checks that the content can produce a playable session.
    pub fn validate(&self) -> LoadResult<()> {
        if self.heroes.is_empty() {
            anyhow::bail!("Recruitment pool is empty");
        }
        if self.enemies.is_empty() {
            anyhow::bail!("Enemy team is empty");
        }
        if self.config.max_rounds == 0 {
            anyhow::bail!("max_rounds must be at least 1");
        }
        Ok(())
    }
}

/// Content factory that loads game content from an optional data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── game.toml
/// ├── heroes.ron
/// └── enemies.ron
/// ```
///
/// Files missing from the directory fall back to the built-in copies.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a factory that reads overrides from `data_dir`.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory that only serves the built-in content.
    pub fn builtin() -> Self {
        Self { data_dir: None }
    }

    /// Load the recruitment pool from `heroes.ron`.
    pub fn load_heroes(&self) -> LoadResult<Vec<UnitTemplate>> {
        match self.override_path(HEROES_FILE) {
            Some(path) => UnitLoader::load(&path),
            None => UnitLoader::parse(HEROES_RON),
        }
    }

    /// Load the enemy team from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<UnitTemplate>> {
        match self.override_path(ENEMIES_FILE) {
            Some(path) => UnitLoader::load(&path),
            None => UnitLoader::parse(ENEMIES_RON),
        }
    }

    /// Load game configuration from `game.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.override_path(GAME_FILE) {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::parse(GAME_TOML),
        }
    }

    /// Load and validate all content.
    pub fn load(&self) -> LoadResult<GameContent> {
        let content = GameContent {
            heroes: self.load_heroes()?,
            enemies: self.load_enemies()?,
            config: self.load_config()?,
        };
        content.validate()?;
        Ok(content)
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn override_path(&self, file: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(file))
            .filter(|path| path.is_file())
    }
}
