//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.heal_min <= config.heal_max,
            "heal_min ({}) exceeds heal_max ({})",
            config.heal_min,
            config.heal_max
        );
        anyhow::ensure!(
            config.encounter_min_steps <= config.encounter_max_steps,
            "encounter_min_steps ({}) exceeds encounter_max_steps ({})",
            config.encounter_min_steps,
            config.encounter_max_steps
        );
        anyhow::ensure!(
            config.herb_drop_percent <= 100,
            "herb_drop_percent must be at most 100 (got {})",
            config.herb_drop_percent
        );

        Ok(config)
    }
}
