//! Static field layout served through [`game_core::MapOracle`].
use std::collections::HashMap;

use game_content::FieldData;
use game_core::{MapDimensions, MapOracle, Position, StaticTile};

/// MapOracle implementation with static field data.
///
/// Holds the immutable layout; nothing on the field changes during play.
pub struct MapOracleImpl {
    dimensions: MapDimensions,
    tiles: HashMap<Position, StaticTile>,
    start: Position,
}

impl MapOracleImpl {
    pub fn new(
        dimensions: MapDimensions,
        tiles: HashMap<Position, StaticTile>,
        start: Position,
    ) -> Self {
        Self {
            dimensions,
            tiles,
            start,
        }
    }
}

impl From<FieldData> for MapOracleImpl {
    fn from(field: FieldData) -> Self {
        Self::new(field.dimensions, field.tiles, field.start)
    }
}

impl MapOracle for MapOracleImpl {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(self.tiles.get(&position).copied().unwrap_or_default())
    }

    fn start_position(&self) -> Position {
        self.start
    }
}
