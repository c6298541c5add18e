//! Stub oracles shared by unit tests.

use crate::config::GameConfig;
use crate::env::{
    AttackRange, EnemyTemplate, Env, GameEnv, MapDimensions, MapOracle, RngOracle, StaticTile,
    TerrainKind,
};
use crate::state::Position;

/// 21 x 20 field: trees at (3,2) and (8,8), water on rows 13..=14, grass below.
#[derive(Debug, Default)]
pub struct TestField;

impl MapOracle for TestField {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(21, 20)
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.dimensions().contains(position) {
            return None;
        }
        let terrain = match (position.x, position.y) {
            (3, 2) | (8, 8) => TerrainKind::Tree,
            (_, 13..=14) => TerrainKind::Water,
            (_, 15..=19) => TerrainKind::Grass,
            _ => TerrainKind::Plain,
        };
        Some(StaticTile::new(terrain))
    }
}

/// Always rolls the bottom (`high: false`) or top (`high: true`) of every range.
#[derive(Debug, Clone, Copy)]
pub struct ExtremeRng {
    pub high: bool,
}

impl ExtremeRng {
    pub const LOW: Self = Self { high: false };
    pub const HIGH: Self = Self { high: true };
}

impl RngOracle for ExtremeRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        if self.high { u32::MAX } else { 0 }
    }

    fn roll_d100(&self, _seed: u64) -> u32 {
        if self.high { 100 } else { 1 }
    }

    fn range(&self, _seed: u64, min: u32, max: u32) -> u32 {
        if self.high { max.max(min) } else { min }
    }

    fn index(&self, _seed: u64, len: usize) -> usize {
        if self.high { len.saturating_sub(1) } else { 0 }
    }
}

pub fn roster() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("enemy1", "Enemy 1", "/images/enemy1.png", 10, AttackRange::new(1, 3)),
        EnemyTemplate::new("enemy2", "Enemy 2", "/images/enemy2.png", 15, AttackRange::new(4, 6)),
        EnemyTemplate::new("enemy3", "Enemy 3", "/images/enemy3.png", 20, AttackRange::new(7, 9)),
    ]
}

pub fn env<'a, R: RngOracle + 'a>(
    map: &'a TestField,
    roster: &'a Vec<EnemyTemplate>,
    config: &'a GameConfig,
    rng: &'a R,
) -> GameEnv<'a> {
    Env::with_all(map, roster, config, rng).into_game_env()
}
