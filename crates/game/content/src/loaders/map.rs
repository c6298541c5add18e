//! Field layout loader.
//!
//! Loads pure terrain data from a RON file. Unlisted tiles are `Plain`;
//! rectangle fills are applied first and single tiles override them.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use game_core::{MapDimensions, Position, StaticTile, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Field data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    start: (i32, i32),
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
    #[serde(default)]
    fills: Vec<(i32, i32, i32, i32, TerrainKind)>, // (x0, y0, x1, y1, terrain), inclusive
}

/// Parsed field layout, ready to back a map oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldData {
    pub dimensions: MapDimensions,
    pub start: Position,
    pub tiles: HashMap<Position, StaticTile>,
}

/// Loader for field layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<FieldData> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<FieldData> {
        let data: FieldDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        anyhow::ensure!(dimensions.area() > 0, "field has no tiles");

        // Fill entire map with default Plain tiles first
        let mut tiles = HashMap::with_capacity(dimensions.area());
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                tiles.insert(Position::new(x, y), StaticTile::new(TerrainKind::Plain));
            }
        }

        let mut place = |position: Position, terrain: TerrainKind| -> LoadResult<()> {
            anyhow::ensure!(
                dimensions.contains(position),
                "tile {} lies outside the {}x{} field",
                position,
                dimensions.width,
                dimensions.height
            );
            tiles.insert(position, StaticTile::new(terrain));
            Ok(())
        };

        for (x0, y0, x1, y1, terrain) in data.fills {
            for y in y0.min(y1)..=y0.max(y1) {
                for x in x0.min(x1)..=x0.max(x1) {
                    place(Position::new(x, y), terrain)?;
                }
            }
        }

        // Then override with explicitly defined tiles
        for (x, y, terrain) in data.tiles {
            place(Position::new(x, y), terrain)?;
        }

        let start = Position::new(data.start.0, data.start.1);
        anyhow::ensure!(dimensions.contains(start), "start {} is outside the field", start);
        let start_passable = tiles.get(&start).is_none_or(|tile| tile.is_passable());
        anyhow::ensure!(start_passable, "start {} is not passable", start);

        Ok(FieldData {
            dimensions,
            start,
            tiles,
        })
    }
}
