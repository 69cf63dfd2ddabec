//! Adjacency rules learned from an example pattern

use std::collections::HashSet;

use crate::algorithm::bitset::TileBitset;
use crate::analysis::patterns::ExamplePattern;
use crate::analysis::weights::WeightTable;
use crate::spatial::direction::{Direction, is_pos_valid};
use crate::spatial::tiles::TileId;

/// "`neighbor` may appear in `direction` from `source`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    /// Tile the rule is read from
    pub source: TileId,
    /// Tile allowed next to it
    pub neighbor: TileId,
    /// Where the neighbor sits relative to the source
    pub direction: Direction,
}

impl Rule {
    /// Create a rule
    pub const fn new(source: TileId, neighbor: TileId, direction: Direction) -> Self {
        Self {
            source,
            neighbor,
            direction,
        }
    }
}

/// Set of allowed adjacencies
///
/// Only existence matters. Alongside the plain rule set, the allowed
/// neighbors of every (source, direction) pair are kept as a bitset so
/// propagation can test whole candidate sets at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: HashSet<Rule>,
    /// Allowed neighbors per source tile, one bitset per direction
    allowed: Vec<[TileBitset; 4]>,
    universe: usize,
}

impl RuleSet {
    /// Create an empty rule set over `universe` tiles
    pub fn new(universe: usize) -> Self {
        Self {
            rules: HashSet::new(),
            allowed: (0..universe)
                .map(|_| std::array::from_fn(|_| TileBitset::new(universe)))
                .collect(),
            universe,
        }
    }

    /// Add a rule; rules naming tiles outside the universe are ignored
    pub fn insert(&mut self, rule: Rule) {
        if rule.source >= self.universe || rule.neighbor >= self.universe {
            return;
        }
        if let Some(per_direction) = self.allowed.get_mut(rule.source) {
            if let Some(allowed) = per_direction.get_mut(rule.direction.index()) {
                allowed.insert(rule.neighbor);
            }
        }
        self.rules.insert(rule);
    }

    /// Whether the exact rule exists
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// Whether `neighbor` may sit in `direction` from `source`
    pub fn allows(&self, source: TileId, neighbor: TileId, direction: Direction) -> bool {
        self.contains(&Rule::new(source, neighbor, direction))
    }

    /// Tiles allowed in `direction` from `source`
    pub fn allowed_neighbors(&self, source: TileId, direction: Direction) -> Option<&TileBitset> {
        self.allowed
            .get(source)
            .and_then(|per_direction| per_direction.get(direction.index()))
    }

    /// Tiles supported in `direction` by at least one of `sources`
    pub fn supported_by(&self, sources: &TileBitset, direction: Direction) -> TileBitset {
        let mut supported = TileBitset::new(self.universe);
        for source in sources.iter() {
            if let Some(allowed) = self.allowed_neighbors(source, direction) {
                supported.union_with(allowed);
            }
        }
        supported
    }

    /// Number of distinct rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule exists
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of tiles the rules range over
    pub const fn universe(&self) -> usize {
        self.universe
    }

    /// Iterate the rules in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

/// Derive adjacency rules and tile weights from an example
///
/// Every cell adds one to its tile's weight and one rule per in-bounds
/// neighbor. Bounds come from the example itself, never from the output grid.
pub fn extract(example: &ExamplePattern) -> (RuleSet, WeightTable) {
    let universe = example.alphabet().len();
    let (height, width) = (example.height(), example.width());
    let mut rules = RuleSet::new(universe);
    let mut weights = WeightTable::new(universe);

    for ((row, col), &tile) in example.cells().indexed_iter() {
        weights.increment(tile);

        for direction in Direction::ALL {
            let Some(neighbor_pos) = is_pos_valid([row, col], direction, width, height) else {
                continue;
            };
            if let Some(neighbor) = example.get(neighbor_pos) {
                rules.insert(Rule::new(tile, neighbor, direction));
            }
        }
    }

    (rules, weights)
}
