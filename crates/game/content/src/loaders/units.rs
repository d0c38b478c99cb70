//! Unit template loader.
//!
//! Loads ordered lists of unit templates (recruitment pool, enemy team) from
//! RON files.

use std::path::Path;

use game_core::UnitTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for unit template lists from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load unit templates from a RON file.
    ///
    /// RON format: `Vec<UnitTemplate>`; `kind` is optional and defaults to
    /// `soldier`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    ///
    /// # Returns
    ///
    /// Returns the templates in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse unit templates from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<UnitTemplate>> {
        let templates: Vec<UnitTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit list RON: {}", e))?;

        for template in &templates {
            if template.name.contains(',') {
                anyhow::bail!(
                    "Unit name '{}' must not contain a comma",
                    template.name
                );
            }
            if template.health <= 0 {
                anyhow::bail!(
                    "Unit '{}' must start with positive health (got {})",
                    template.name,
                    template.health
                );
            }
            if template.damage < 0 {
                anyhow::bail!(
                    "Unit '{}' must not have negative damage (got {})",
                    template.name,
                    template.damage
                );
            }
        }

        Ok(templates)
    }
}
