use crate::state::Position;

/// Static map oracle exposing the immutable field layout.
///
/// This is the Terrain Model: a pure lookup with no side effects. Bounds are
/// answered separately by [`MapOracle::contains`] so callers decide how to
/// treat the field edge.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Returns the tile at `position`, or `None` when the layout has no entry.
    fn tile(&self, position: Position) -> Option<StaticTile>;

    /// Where the player stands when a session starts.
    fn start_position(&self) -> Position {
        Position::ORIGIN
    }

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// False for tree and water tiles; unknown positions default to passable.
    fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_none_or(StaticTile::is_passable)
    }

    fn terrain(&self, position: Position) -> TerrainKind {
        self.tile(position)
            .map_or(TerrainKind::Plain, StaticTile::terrain)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Immutable descriptor for a tile in the static layout. Defaults to plain ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Terrain classes for the field. Trees and water are the only obstacles and
/// never overlap: a tile has exactly one kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Plain,
    /// Decorative; walkable.
    Grass,
    Tree,
    Water,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, TerrainKind::Tree | TerrainKind::Water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct SparseMap {
        tiles: HashMap<Position, StaticTile>,
    }

    impl MapOracle for SparseMap {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(4, 3)
        }

        fn tile(&self, position: Position) -> Option<StaticTile> {
            self.tiles.get(&position).copied()
        }
    }

    fn sparse() -> SparseMap {
        let mut tiles = HashMap::new();
        tiles.insert(Position::new(1, 1), StaticTile::new(TerrainKind::Tree));
        tiles.insert(Position::new(2, 1), StaticTile::new(TerrainKind::Water));
        tiles.insert(Position::new(3, 1), StaticTile::new(TerrainKind::Grass));
        SparseMap { tiles }
    }

    #[test]
    fn obstacles_are_not_passable() {
        let map = sparse();
        assert!(!map.is_passable(Position::new(1, 1)));
        assert!(!map.is_passable(Position::new(2, 1)));
    }

    #[test]
    fn grass_and_unlisted_tiles_are_passable() {
        let map = sparse();
        assert!(map.is_passable(Position::new(3, 1)));
        assert!(map.is_passable(Position::new(0, 0)));
        assert_eq!(map.terrain(Position::new(0, 0)), TerrainKind::Plain);
    }

    #[test]
    fn bounds_are_half_open() {
        let dims = MapDimensions::new(4, 3);
        assert!(dims.contains(Position::new(0, 0)));
        assert!(dims.contains(Position::new(3, 2)));
        assert!(!dims.contains(Position::new(4, 0)));
        assert!(!dims.contains(Position::new(0, 3)));
        assert!(!dims.contains(Position::new(-1, 0)));
        assert_eq!(dims.index_of(Position::new(3, 2)), Some(11));
        assert_eq!(dims.index_of(Position::new(4, 2)), None);
    }
}
