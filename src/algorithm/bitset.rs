use bitvec::prelude::*;
use std::fmt;

use crate::spatial::tiles::TileId;

/// Fixed-size bitset holding the candidate tiles of one cell
///
/// Indexed by `TileId`, so the universe size equals the number of distinct
/// tiles in the example. Membership, removal and set operations are O(universe).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(universe: usize) -> Self {
        Self {
            bits: bitvec![0; universe],
        }
    }

    /// Create a bitset containing every tile of the universe
    pub fn all(universe: usize) -> Self {
        Self {
            bits: bitvec![1; universe],
        }
    }

    /// Create a bitset holding exactly one tile
    pub fn singleton(universe: usize, tile: TileId) -> Self {
        let mut bitset = Self::new(universe);
        bitset.insert(tile);
        bitset
    }

    /// Size of the universe this set ranges over
    pub fn universe(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile, ignoring ids outside the universe
    pub fn insert(&mut self, tile: TileId) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile, returning whether it was present
    pub fn remove(&mut self, tile: TileId) -> bool {
        let present = self.contains(tile);
        if present {
            self.bits.set(tile, false);
        }
        present
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every tile of another bitset in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The only tile of a singleton set
    pub fn single(&self) -> Option<TileId> {
        if self.count() == 1 {
            self.bits.first_one()
        } else {
            None
        }
    }

    /// Iterate tiles in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile ids as a vector
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
