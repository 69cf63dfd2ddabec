use crate::{
    algorithm::bitset::TileBitset, analysis::weights::WeightTable, math::entropy::shannon_entropy,
    spatial::SuperpositionGrid,
};

/// Weighted Shannon entropy of a cell's remaining candidates
///
/// A singleton has entropy 0; so does an empty set, which selection never
/// reaches because propagation refuses to empty a cell.
pub fn cell_entropy(candidates: &TileBitset, weights: &WeightTable) -> f64 {
    shannon_entropy(
        candidates
            .iter()
            .map(|tile| f64::from(weights.get(tile).unwrap_or(0))),
    )
}

/// Position of the uncollapsed cell with the lowest entropy
///
/// Scans in row-major order and keeps the first strict minimum, so ties go to
/// the earliest cell. `None` means every cell has been collapsed.
pub fn select_min_entropy(grid: &SuperpositionGrid, weights: &WeightTable) -> Option<[usize; 2]> {
    let mut best: Option<([usize; 2], f64)> = None;

    for pos in grid.positions() {
        if grid.is_collapsed(pos) {
            continue;
        }
        let Some(candidates) = grid.candidates(pos) else {
            continue;
        };

        let entropy = cell_entropy(candidates, weights);
        if best.is_none_or(|(_, min_entropy)| entropy < min_entropy) {
            best = Some((pos, entropy));
        }
    }

    best.map(|(pos, _)| pos)
}
