//! JSON summary of a generated layout for downstream obstacle placement

use crate::algorithm::executor::WaveFunctionCollapse;
use crate::io::error::{AlgorithmError, Result, WithContext};
use crate::io::image::ensure_parent_dir;
use crate::spatial::layout::LayoutTile;
use serde::Serialize;
use std::path::Path;

/// Serializable snapshot of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Seed the run was generated with
    pub seed: u64,
    /// Collapse steps taken
    pub steps: usize,
    /// Collapsed symbol per cell, row by row; undecided cells are `None`
    pub rows: Vec<Vec<Option<String>>>,
    /// Blocking entities
    pub walls: Vec<LayoutTile>,
    /// Walkable entities
    pub open: Vec<LayoutTile>,
    /// Positions (column, row) of every wall
    pub wall_positions: Vec<[usize; 2]>,
}

impl LayoutSummary {
    /// Snapshot the current state of an engine
    pub fn from_engine(engine: &WaveFunctionCollapse) -> Self {
        let grid = engine.grid();
        let rows = (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| engine.symbol_at([row, col]).map(str::to_string))
                    .collect()
            })
            .collect();
        let layout = engine.layout();

        Self {
            width: grid.width(),
            height: grid.height(),
            seed: engine.config().seed,
            steps: engine.iteration(),
            rows,
            walls: layout.walls.clone(),
            open: layout.open.clone(),
            wall_positions: layout.wall_positions.clone(),
        }
    }

    /// Write the summary as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).with_path(path)?;
        ensure_parent_dir(path)?;
        std::fs::write(path, content).map_err(|e| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "write layout summary",
            source: e,
        })
    }
}
