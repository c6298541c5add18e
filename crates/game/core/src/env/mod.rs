//! Traits describing read-only world data.
//!
//! Oracles expose the static field layout, the enemy roster, tunables and the
//! random source. The [`Env`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod enemies;
mod error;
mod map;
mod rng;

pub use enemies::{AttackRange, EnemyOracle, EnemyTemplate};
pub use error::OracleError;
pub use map::{MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, RollKind, compute_seed};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the action pipeline.
pub struct Env<'a, M, E, R>
where
    M: MapOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    map: Option<&'a M>,
    enemies: Option<&'a E>,
    config: Option<&'a GameConfig>,
    rng: Option<&'a R>,
}

impl<M, E, R> Clone for Env<'_, M, E, R>
where
    M: MapOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Derives would demand `M: Copy`, which trait objects never are.
impl<M, E, R> Copy for Env<'_, M, E, R>
where
    M: MapOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn EnemyOracle + 'a, dyn RngOracle + 'a>;

impl<'a, M, E, R> Env<'a, M, E, R>
where
    M: MapOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        map: Option<&'a M>,
        enemies: Option<&'a E>,
        config: Option<&'a GameConfig>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            map,
            enemies,
            config,
            rng,
        }
    }

    pub fn with_all(map: &'a M, enemies: &'a E, config: &'a GameConfig, rng: &'a R) -> Self {
        Self::new(Some(map), Some(enemies), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            enemies: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the EnemyOracle, or an error if not available.
    pub fn enemies(&self) -> Result<&'a E, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    pub fn config(&self) -> Result<&'a GameConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, M, E, R> Env<'a, M, E, R>
where
    M: MapOracle + 'a,
    E: EnemyOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let enemies: Option<&'a dyn EnemyOracle> = self.enemies.map(|enemies| enemies as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(map, enemies, self.config, rng)
    }
}
