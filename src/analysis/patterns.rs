//! Example patterns: hand-authored tile matrices interned to tile ids

use ndarray::Array2;

use crate::io::configuration::LABYRINTH_EXAMPLE;
use crate::io::error::{Result, invalid_source};
use crate::spatial::tiles::{TileAlphabet, TileId};

/// Rectangular example matrix the adjacency rules and weights are learned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePattern {
    cells: Array2<TileId>,
    alphabet: TileAlphabet,
}

impl ExamplePattern {
    /// Build a pattern from rows of symbols
    ///
    /// Symbols are interned in row-major order of first appearance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matrix has no rows or its first row is empty
    /// - Rows have different lengths
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(invalid_source(&"Example pattern is empty"));
        }

        let mut alphabet = TileAlphabet::new();
        let mut ids = Vec::with_capacity(height * width);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(invalid_source(&format!(
                    "Example row {row_index} has {} cells, expected {width}",
                    row.len()
                )));
            }
            ids.extend(row.iter().map(|symbol| alphabet.intern(symbol.as_ref())));
        }

        let cells = Array2::from_shape_vec((height, width), ids)
            .map_err(|e| invalid_source(&format!("Example pattern shape mismatch: {e}")))?;

        Ok(Self { cells, alphabet })
    }

    /// Build a pattern where every character of a row is one symbol
    ///
    /// # Errors
    ///
    /// Same conditions as [`ExamplePattern::from_rows`]
    pub fn from_char_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let split: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.as_ref().chars().map(String::from).collect())
            .collect();
        Self::from_rows(&split)
    }

    /// The built-in labyrinth example
    ///
    /// # Errors
    ///
    /// Never fails for the shipped constant, but keeps the constructor contract
    pub fn labyrinth() -> Result<Self> {
        Self::from_char_rows(&LABYRINTH_EXAMPLE)
    }

    /// Tile ids of the example (indexed by `row`, `col`)
    pub const fn cells(&self) -> &Array2<TileId> {
        &self.cells
    }

    /// Symbols used by the example
    pub const fn alphabet(&self) -> &TileAlphabet {
        &self.alphabet
    }

    /// Tile id at a position
    pub fn get(&self, pos: [usize; 2]) -> Option<TileId> {
        self.cells.get(pos).copied()
    }

    /// Example height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Example width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }
}
