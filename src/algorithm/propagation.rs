use crate::{
    analysis::rules::RuleSet,
    io::error::{AlgorithmError, Result},
    spatial::grid::Restriction,
    spatial::{Direction, SuperpositionGrid, is_pos_valid},
};
use std::collections::HashSet;

/// When a narrowed neighbor is pushed back onto the work stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropagationPolicy {
    /// Cells are marked visited when popped and never pushed again in the same
    /// call, even if a later step narrows them once more
    ///
    /// Matches the layouts existing maps were generated with. A cell narrowed
    /// after its own visit may be left short of full arc consistency.
    #[default]
    VisitOnce,
    /// Every narrowed neighbor is pushed again, reaching full arc consistency
    /// over the touched region
    Exhaustive,
}

/// Counters describing one propagation call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Number of cells popped from the work stack
    pub visits: usize,
    /// Number of candidates removed across all cells
    pub removals: usize,
}

/// Restrict the neighbors of `origin` until no removal cascades further
///
/// The work list is a LIFO stack seeded with `origin`. For every popped cell
/// and each direction (up, down, left, right) with an in-bounds neighbor, a
/// neighbor candidate survives only if at least one candidate of the popped
/// cell has a rule allowing it in that direction.
///
/// # Errors
///
/// Returns `Contradiction` (with iteration 0, to be stamped by the caller) when
/// a neighbor would lose its last candidate. That neighbor is left unchanged;
/// cells narrowed earlier in the call keep their narrowed state.
pub fn propagate(
    grid: &mut SuperpositionGrid,
    rules: &RuleSet,
    origin: [usize; 2],
    policy: PropagationPolicy,
) -> Result<PropagationReport> {
    let (width, height) = (grid.width(), grid.height());
    let mut report = PropagationReport::default();
    let mut to_visit = vec![origin];
    let mut visited = HashSet::new();

    while let Some(current) = to_visit.pop() {
        visited.insert(current);
        report.visits += 1;

        let Some(sources) = grid.candidates(current).cloned() else {
            continue;
        };

        for direction in Direction::ALL {
            let Some(neighbor) = is_pos_valid(current, direction, width, height) else {
                continue;
            };

            let supported = rules.supported_by(&sources, direction);
            match grid.restrict(neighbor, &supported) {
                Restriction::Unchanged => {}
                Restriction::Narrowed(removed) => {
                    report.removals += removed;
                    match policy {
                        // One push per removed candidate, as long as the neighbor was not popped yet
                        PropagationPolicy::VisitOnce => {
                            if !visited.contains(&neighbor) {
                                to_visit.extend(std::iter::repeat_n(neighbor, removed));
                            }
                        }
                        PropagationPolicy::Exhaustive => to_visit.push(neighbor),
                    }
                }
                Restriction::Emptied => {
                    return Err(AlgorithmError::Contradiction {
                        position: neighbor,
                        iteration: 0,
                    });
                }
            }
        }
    }

    Ok(report)
}
