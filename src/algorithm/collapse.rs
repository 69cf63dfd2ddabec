use crate::{
    algorithm::bitset::TileBitset,
    analysis::weights::WeightTable,
    math::probability::RandomSelector,
    spatial::tiles::{TileId, TileKind, TileSpec},
    spatial::{Layout, SuperpositionGrid},
};

/// What happened to a cell asked to collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseOutcome {
    /// The cell was fixed to this tile just now
    Fixed(TileId),
    /// The cell had been collapsed before and keeps this tile
    AlreadyCollapsed(TileId),
    /// A forced collapse found more than one candidate
    Ambiguous(usize),
    /// The cell has no candidate left
    Empty,
}

/// Draw one tile from `candidates`, proportionally to its weight
///
/// Candidates are offered to the selector in ascending id order, so a seeded
/// selector reproduces the same draw.
pub fn choose_tile(
    candidates: &TileBitset,
    weights: &WeightTable,
    selector: &mut RandomSelector,
) -> Option<TileId> {
    let tiles = candidates.to_vec();
    let tile_weights = weights.weights_of(tiles.iter().copied());
    let index = selector.weighted_choice(&tile_weights)?;
    tiles.get(index).copied()
}

/// Fix a cell to one weighted-random candidate
///
/// This is the only place randomness is consumed.
pub fn collapse_cell(
    grid: &mut SuperpositionGrid,
    pos: [usize; 2],
    weights: &WeightTable,
    selector: &mut RandomSelector,
) -> CollapseOutcome {
    if let Some(tile) = grid.tile_at(pos) {
        return CollapseOutcome::AlreadyCollapsed(tile);
    }
    let Some(candidates) = grid.candidates(pos) else {
        return CollapseOutcome::Empty;
    };

    match choose_tile(candidates, weights, selector) {
        Some(tile) => {
            grid.fix(pos, tile);
            CollapseOutcome::Fixed(tile)
        }
        None => CollapseOutcome::Empty,
    }
}

/// Fix a cell to its single remaining candidate without drawing
pub fn force_collapse_cell(grid: &mut SuperpositionGrid, pos: [usize; 2]) -> CollapseOutcome {
    if let Some(tile) = grid.tile_at(pos) {
        return CollapseOutcome::AlreadyCollapsed(tile);
    }
    let Some(candidates) = grid.candidates(pos) else {
        return CollapseOutcome::Empty;
    };

    match candidates.count() {
        0 => CollapseOutcome::Empty,
        1 => match candidates.single() {
            Some(tile) => {
                grid.fix(pos, tile);
                CollapseOutcome::Fixed(tile)
            }
            None => CollapseOutcome::Empty,
        },
        remaining => CollapseOutcome::Ambiguous(remaining),
    }
}

/// Turn a freshly fixed cell into a wall or open entity
pub fn materialize(
    layout: &mut Layout,
    pos: [usize; 2],
    tile: TileId,
    specs: &[TileSpec],
) -> Option<TileKind> {
    specs.get(tile).map(|spec| layout.record(pos, tile, spec))
}
