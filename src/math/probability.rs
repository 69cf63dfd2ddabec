use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::{SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// Every random decision of a generation run goes through one selector, so
/// two runs built with the same seed make the same choices.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weight-proportional draw of one index
    ///
    /// Returns `None` when there is nothing to draw from or every weight is zero.
    pub fn weighted_choice(&mut self, weights: &[u32]) -> Option<usize> {
        let distribution = WeightedIndex::new(weights).ok()?;
        Some(distribution.sample(&mut self.rng))
    }
}
