//! Read-only views handed to the presentation layer.

use bitflags::bitflags;

use crate::env::{MapDimensions, MapOracle, TerrainKind};
use crate::state::{BattleSession, GameState, PlayerState, Position, Timestamp};

bitflags! {
    /// Obstacle and decoration flags for one field tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const TREE  = 1 << 0;
        const WATER = 1 << 1;
        const GRASS = 1 << 2;
    }
}

impl TileFlags {
    pub fn from_terrain(terrain: TerrainKind) -> Self {
        match terrain {
            TerrainKind::Plain => TileFlags::empty(),
            TerrainKind::Grass => TileFlags::GRASS,
            TerrainKind::Tree => TileFlags::TREE,
            TerrainKind::Water => TileFlags::WATER,
        }
    }

    pub fn is_blocked(self) -> bool {
        self.intersects(TileFlags::TREE | TileFlags::WATER)
    }
}

/// Row-major tile flags for the whole field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldView {
    pub dimensions: MapDimensions,
    tiles: Vec<TileFlags>,
}

impl FieldView {
    pub fn from_map<M>(map: &M) -> Self
    where
        M: MapOracle + ?Sized,
    {
        let dimensions = map.dimensions();
        let tiles = (0..dimensions.height as i32)
            .flat_map(|y| (0..dimensions.width as i32).map(move |x| Position::new(x, y)))
            .map(|position| TileFlags::from_terrain(map.terrain(position)))
            .collect();
        Self { dimensions, tiles }
    }

    /// Flags at `position`; empty outside the field.
    pub fn flags_at(&self, position: Position) -> TileFlags {
        self.dimensions
            .index_of(position)
            .and_then(|index| self.tiles.get(index).copied())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileFlags]> {
        self.tiles.chunks(self.dimensions.width.max(1) as usize)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub clock: Timestamp,
    pub player: PlayerState,
    pub battle: Option<BattleSession>,
    /// Oldest first.
    pub messages: Vec<String>,
    pub field: FieldView,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, field: FieldView) -> Self {
        Self {
            clock: state.clock,
            player: state.player.clone(),
            battle: state.battle.clone(),
            messages: state.messages.iter().map(str::to_owned).collect(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestField;

    #[test]
    fn field_view_marks_obstacles_and_grass() {
        let view = FieldView::from_map(&TestField);

        assert_eq!(view.flags_at(Position::new(3, 2)), TileFlags::TREE);
        assert_eq!(view.flags_at(Position::new(8, 8)), TileFlags::TREE);
        assert_eq!(view.flags_at(Position::new(20, 13)), TileFlags::WATER);
        assert_eq!(view.flags_at(Position::new(0, 19)), TileFlags::GRASS);
        assert!(view.flags_at(Position::new(1, 1)).is_empty());
        assert!(view.flags_at(Position::new(-1, 0)).is_empty());
        assert_eq!(view.rows().count(), 20);
        assert!(view.rows().all(|row| row.len() == 21));
    }

    #[test]
    fn blocked_flags_match_passability() {
        let view = FieldView::from_map(&TestField);
        for (y, row) in view.rows().enumerate() {
            for (x, flags) in row.iter().enumerate() {
                let position = Position::new(x as i32, y as i32);
                assert_eq!(flags.is_blocked(), !TestField.is_passable(position));
            }
        }
    }
}
