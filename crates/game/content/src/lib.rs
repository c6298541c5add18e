//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Enemy roster (RON)
//! - Field layout (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//! A reference content set lives in `data/` and is embedded at compile time,
//! see [`ContentFactory::builtin`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, Content, ContentFactory, EnemyLoader, FieldData, LoadResult, MapLoader,
};
