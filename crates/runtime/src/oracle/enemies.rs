//! Enemy roster served through [`game_core::EnemyOracle`].
use game_core::{EnemyOracle, EnemyTemplate};

pub struct EnemyOracleImpl {
    roster: Vec<EnemyTemplate>,
}

impl EnemyOracleImpl {
    pub fn new(roster: Vec<EnemyTemplate>) -> Self {
        Self { roster }
    }
}

impl EnemyOracle for EnemyOracleImpl {
    fn roster(&self) -> &[EnemyTemplate] {
        &self.roster
    }
}
