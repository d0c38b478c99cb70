//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and provides loaders for RON/TOML
//! data files:
//! - Recruitment pool (`heroes.ron`)
//! - Enemy team (`enemies.ron`)
//! - Game configuration (`game.toml`)
//!
//! Built-in copies of all three are compiled in, so a content directory only
//! needs the files it overrides.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, GameContent, UnitLoader};
