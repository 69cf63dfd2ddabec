use crate::spatial::tiles::TileId;

/// Occurrence count of every tile in the example
///
/// The raw counts are used unnormalized, both as sampling weights and as
/// entropy inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    counts: Vec<u32>,
}

impl WeightTable {
    /// Create a table with a zero count for each of `universe` tiles
    pub fn new(universe: usize) -> Self {
        Self {
            counts: vec![0; universe],
        }
    }

    /// Build a table from counts indexed by tile id
    pub const fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Count one more occurrence of a tile, growing the table if needed
    pub fn increment(&mut self, tile: TileId) {
        if tile >= self.counts.len() {
            self.counts.resize(tile + 1, 0);
        }
        if let Some(count) = self.counts.get_mut(tile) {
            *count += 1;
        }
    }

    /// Weight of a tile, `None` when the tile has no positive entry
    pub fn get(&self, tile: TileId) -> Option<u32> {
        self.counts.get(tile).copied().filter(|&count| count > 0)
    }

    /// Weights of the given tiles, in the same order
    ///
    /// Tiles without an entry contribute zero; engine construction guarantees
    /// this never happens for tiles of the candidate universe.
    pub fn weights_of(&self, tiles: impl IntoIterator<Item = TileId>) -> Vec<u32> {
        tiles
            .into_iter()
            .map(|tile| self.get(tile).unwrap_or(0))
            .collect()
    }

    /// First tile of `0..universe` without a positive weight
    pub fn first_missing(&self, universe: usize) -> Option<TileId> {
        (0..universe).find(|&tile| self.get(tile).is_none())
    }

    /// Number of tiles with an entry
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Raw counts indexed by tile id
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}
