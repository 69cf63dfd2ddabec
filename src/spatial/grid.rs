//! Superposition grid holding the candidate tiles of every output cell
//!
//! Three same-shaped arrays are kept side by side: the candidate bitsets, the
//! collapsed flags and the placeholder markers shown for undecided cells.
//! Mutation is crate-private so only the collapse operator and the propagation
//! engine can narrow a cell.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::TileId;

/// Outcome of narrowing one cell to the tiles allowed by a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// Every candidate was allowed
    Unchanged,
    /// This many candidates were removed and at least one remains
    Narrowed(usize),
    /// No candidate would survive; the cell was left untouched
    Emptied,
}

/// Grid of cells in superposition
#[derive(Debug, Clone)]
pub struct SuperpositionGrid {
    /// Remaining candidate tiles per cell (indexed by `row`, `col`)
    candidates: Array2<TileBitset>,

    /// Whether each cell went through collapse
    collapsed: Array2<bool>,

    /// Whether each cell still shows its "not yet decided" marker
    placeholders: Array2<bool>,

    /// Number of distinct tiles
    universe: usize,
}

impl SuperpositionGrid {
    /// Create a grid where every cell may still hold any of `universe` tiles
    pub fn new(width: usize, height: usize, universe: usize) -> Self {
        Self {
            candidates: Array2::from_elem((height, width), TileBitset::all(universe)),
            collapsed: Array2::from_elem((height, width), false),
            placeholders: Array2::from_elem((height, width), true),
            universe,
        }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.candidates.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.candidates.ncols()
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cols()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.rows()
    }

    /// Number of distinct tiles a cell can hold
    pub const fn universe(&self) -> usize {
        self.universe
    }

    /// Candidate tiles of a cell
    pub fn candidates(&self, pos: [usize; 2]) -> Option<&TileBitset> {
        self.candidates.get(pos)
    }

    /// Whether a cell went through collapse (false outside the grid)
    pub fn is_collapsed(&self, pos: [usize; 2]) -> bool {
        self.collapsed.get(pos).copied().unwrap_or(false)
    }

    /// Whether a cell still shows its placeholder marker (false outside the grid)
    pub fn has_placeholder(&self, pos: [usize; 2]) -> bool {
        self.placeholders.get(pos).copied().unwrap_or(false)
    }

    /// Number of placeholder markers still shown
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.iter().filter(|&&shown| shown).count()
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.collapsed.iter().filter(|&&done| done).count()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.candidates.len()
    }

    /// Whether every cell went through collapse
    pub fn is_fully_collapsed(&self) -> bool {
        self.collapsed.iter().all(|&done| done)
    }

    /// Decided tile of a cell: its single candidate once collapsed
    pub fn tile_at(&self, pos: [usize; 2]) -> Option<TileId> {
        if self.is_collapsed(pos) {
            self.candidates(pos).and_then(TileBitset::single)
        } else {
            None
        }
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + use<> {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// Fix a cell to one tile, mark it collapsed and drop its placeholder
    pub(crate) fn fix(&mut self, pos: [usize; 2], tile: TileId) {
        let universe = self.universe;
        if let Some(cell) = self.candidates.get_mut(pos) {
            *cell = TileBitset::singleton(universe, tile);
        }
        if let Some(flag) = self.collapsed.get_mut(pos) {
            *flag = true;
        }
        if let Some(marker) = self.placeholders.get_mut(pos) {
            *marker = false;
        }
    }

    /// Keep only the candidates of a cell that are in `allowed`
    ///
    /// A restriction that would empty the cell is reported and not applied.
    pub(crate) fn restrict(&mut self, pos: [usize; 2], allowed: &TileBitset) -> Restriction {
        let Some(cell) = self.candidates.get_mut(pos) else {
            return Restriction::Unchanged;
        };
        let before = cell.count();
        let narrowed = cell.intersection(allowed);
        let after = narrowed.count();

        if after == before {
            Restriction::Unchanged
        } else if after == 0 {
            Restriction::Emptied
        } else {
            *cell = narrowed;
            Restriction::Narrowed(before - after)
        }
    }
}
