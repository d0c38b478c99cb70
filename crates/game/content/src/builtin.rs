//! Content shipped with the game.

/// Recruitment pool in RON form.
pub const HEROES_RON: &str = include_str!("../data/heroes.ron");

/// Enemy team in RON form.
pub const ENEMIES_RON: &str = include_str!("../data/enemies.ron");

/// Game configuration in TOML form.
pub const GAME_TOML: &str = include_str!("../data/game.toml");

pub const HEROES_FILE: &str = "heroes.ron";
pub const ENEMIES_FILE: &str = "enemies.ron";
pub const GAME_FILE: &str = "game.toml";
