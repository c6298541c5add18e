//! Content loaders for reading game data from files.
//!
//! Each loader can read from a path or parse an in-memory string, so the
//! same code serves on-disk content and the embedded built-in set.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod map;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::{Content, ContentFactory};
pub use map::{FieldData, MapLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
