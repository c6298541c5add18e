//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`game_core::Env`] snapshots
//! on demand. The data is immutable at runtime; dynamic state lives in
//! [`game_core::GameState`].
mod enemies;
mod map;

use std::sync::Arc;

use game_content::Content;
use game_core::{Env, FieldView, GameConfig, GameEnv, PcgRng};

pub use enemies::EnemyOracleImpl;
pub use map::MapOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    map: Arc<MapOracleImpl>,
    enemies: Arc<EnemyOracleImpl>,
    config: Arc<GameConfig>,
    rng: PcgRng,
    field: Arc<FieldView>,
}

impl OracleManager {
    pub fn new(
        map: Arc<MapOracleImpl>,
        enemies: Arc<EnemyOracleImpl>,
        config: Arc<GameConfig>,
    ) -> Self {
        let field = Arc::new(FieldView::from_map(map.as_ref()));
        Self {
            map,
            enemies,
            config,
            rng: PcgRng, // PcgRng is stateless
            field,
        }
    }

    /// Builds oracles from a loaded content set.
    pub fn from_content(content: Content) -> Self {
        Self::new(
            Arc::new(MapOracleImpl::from(content.field)),
            Arc::new(EnemyOracleImpl::new(content.enemies)),
            Arc::new(content.config),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.map.as_ref(),
            self.enemies.as_ref(),
            self.config.as_ref(),
            &self.rng,
        )
        .into_game_env()
    }

    /// Tile flags for the whole field, computed once.
    pub fn field_view(&self) -> &FieldView {
        &self.field
    }
}
