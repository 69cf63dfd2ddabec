//! Materialized output of a generation run

use serde::Serialize;

use crate::spatial::tiles::{TileId, TileKind, TileSpec};

/// One collapsed cell turned into a placeable entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutTile {
    /// Position as (column, row), the order the game layer uses
    pub position: [usize; 2],
    /// Tile id inside the run
    pub tile: TileId,
    /// Asset reference from the catalog
    pub asset: String,
    /// Wall or open classification
    pub kind: TileKind,
}

/// Wall and open entities produced so far, plus the raw wall positions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Blocking tiles in materialization order
    pub walls: Vec<LayoutTile>,
    /// Walkable tiles in materialization order
    pub open: Vec<LayoutTile>,
    /// Positions (column, row) of every wall, for obstacle placement
    pub wall_positions: Vec<[usize; 2]>,
}

impl Layout {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize the tile decided for grid cell `(row, col)`
    ///
    /// Grid storage is row-major, output positions are (column, row).
    pub fn record(&mut self, cell: [usize; 2], tile: TileId, spec: &TileSpec) -> TileKind {
        let position = [cell[1], cell[0]];
        let entity = LayoutTile {
            position,
            tile,
            asset: spec.asset.clone(),
            kind: spec.kind(),
        };

        let kind = entity.kind;
        match kind {
            TileKind::Wall => {
                self.wall_positions.push(position);
                self.walls.push(entity);
            }
            TileKind::Open => self.open.push(entity),
        }
        kind
    }

    /// Total number of materialized tiles
    pub fn len(&self) -> usize {
        self.walls.len() + self.open.len()
    }

    /// Whether nothing has been materialized yet
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.open.is_empty()
    }

    /// Iterate every materialized tile, walls first
    pub fn tiles(&self) -> impl Iterator<Item = &LayoutTile> {
        self.walls.iter().chain(self.open.iter())
    }
}
