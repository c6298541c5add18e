//! Content factory for loading the full content set.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{EnemyTemplate, GameConfig};

use crate::loaders::{ConfigLoader, EnemyLoader, FieldData, LoadResult, MapLoader};

const BUILTIN_ENEMIES: &str = include_str!("../../data/enemies.ron");
const BUILTIN_FIELD: &str = include_str!("../../data/field.ron");
const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");

/// Everything the runtime needs to build its oracles.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: GameConfig,
    pub enemies: Vec<EnemyTemplate>,
    pub field: FieldData,
}

#[derive(Debug, Clone)]
enum Source {
    Builtin,
    Directory(PathBuf),
}

/// Content factory that loads game content from a data directory or from
/// the copy embedded at compile time.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// └── field.ron
/// ```
#[derive(Debug, Clone)]
pub struct ContentFactory {
    source: Source,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(data_dir.into()),
        }
    }

    /// Content shipped with the crate (`data/` at build time).
    pub fn builtin() -> Self {
        Self {
            source: Source::Builtin,
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match &self.source {
            Source::Builtin => ConfigLoader::parse(BUILTIN_CONFIG).context("built-in config.toml"),
            Source::Directory(dir) => ConfigLoader::load(&dir.join("config.toml")),
        }
    }

    /// Load the enemy roster from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        match &self.source {
            Source::Builtin => EnemyLoader::parse(BUILTIN_ENEMIES).context("built-in enemies.ron"),
            Source::Directory(dir) => EnemyLoader::load(&dir.join("enemies.ron")),
        }
    }

    /// Load the field layout from `field.ron`.
    pub fn load_field(&self) -> LoadResult<FieldData> {
        match &self.source {
            Source::Builtin => MapLoader::parse(BUILTIN_FIELD).context("built-in field.ron"),
            Source::Directory(dir) => MapLoader::load(&dir.join("field.ron")),
        }
    }

    pub fn load_all(&self) -> LoadResult<Content> {
        Ok(Content {
            config: self.load_config()?,
            enemies: self.load_enemies()?,
            field: self.load_field()?,
        })
    }

    /// Returns the data directory path, or `None` for built-in content.
    pub fn data_dir(&self) -> Option<&Path> {
        match &self.source {
            Source::Builtin => None,
            Source::Directory(dir) => Some(dir.as_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Position, TerrainKind};

    #[test]
    fn builtin_content_matches_reference_field() {
        let content = ContentFactory::builtin().load_all().unwrap();

        assert_eq!(content.config, GameConfig::default());
        assert_eq!(content.enemies.len(), 3);
        assert_eq!(content.enemies[2].max_hp, 20);
        assert_eq!(content.enemies[2].attack.min, 7);

        let field = &content.field;
        assert_eq!((field.dimensions.width, field.dimensions.height), (21, 20));
        let terrain = |x, y| field.tiles[&Position::new(x, y)].terrain();
        assert_eq!(terrain(3, 2), TerrainKind::Tree);
        assert_eq!(terrain(8, 8), TerrainKind::Tree);
        assert_eq!(terrain(0, 13), TerrainKind::Water);
        assert_eq!(terrain(20, 14), TerrainKind::Water);
        assert_eq!(terrain(10, 15), TerrainKind::Grass);
        assert_eq!(terrain(10, 12), TerrainKind::Plain);
    }

    #[test]
    fn directory_source_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "initial_herbs = 3\n").unwrap();
        std::fs::write(dir.path().join("enemies.ron"), BUILTIN_ENEMIES).unwrap();
        std::fs::write(dir.path().join("field.ron"), BUILTIN_FIELD).unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.data_dir(), Some(dir.path()));
        let content = factory.load_all().unwrap();
        assert_eq!(content.config.initial_herbs, 3);
    }

    #[test]
    fn missing_directory_fails_with_path() {
        let error = ContentFactory::new("/nonexistent/field-data")
            .load_enemies()
            .unwrap_err();
        assert!(error.to_string().contains("enemies.ron"));
    }
}
