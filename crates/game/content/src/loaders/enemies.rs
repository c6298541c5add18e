//! Enemy roster loader.

use std::path::Path;

use anyhow::Context;
use game_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for the enemy roster from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parses and validates a roster: at least one enemy, unique ids, a
    /// positive HP pool and `min <= max` attack ranges.
    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        anyhow::ensure!(!roster.enemies.is_empty(), "enemy roster is empty");

        for (index, enemy) in roster.enemies.iter().enumerate() {
            anyhow::ensure!(
                enemy.attack.is_valid(),
                "enemy '{}' has attack range {}..={} with min > max",
                enemy.id,
                enemy.attack.min,
                enemy.attack.max
            );
            anyhow::ensure!(enemy.max_hp > 0, "enemy '{}' has no HP", enemy.id);
            anyhow::ensure!(
                roster.enemies[..index].iter().all(|other| other.id != enemy.id),
                "duplicate enemy id '{}'",
                enemy.id
            );
        }

        Ok(roster.enemies)
    }
}
