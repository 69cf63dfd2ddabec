//! Tests for the seeded weighted selector

#[cfg(test)]
mod tests {
    use tilewave::math::probability::RandomSelector;

    // Tests identical seeds produce identical draw sequences
    // Verified by seeding from entropy instead of the given seed
    #[test]
    fn test_seeded_reproducibility() {
        let mut a = RandomSelector::new(1234);
        let mut b = RandomSelector::new(1234);
        let weights = [3, 1, 4, 1, 5];
        for _ in 0..100 {
            assert_eq!(a.weighted_choice(&weights), b.weighted_choice(&weights));
        }
    }

    // Tests zero-weight options are never drawn
    // Verified by drawing uniformly
    #[test]
    fn test_zero_weight_never_drawn() {
        let mut selector = RandomSelector::new(8);
        for _ in 0..500 {
            assert_ne!(selector.weighted_choice(&[5, 0, 5]), Some(1));
        }
    }

    // Tests weights {1, 99} give the first option roughly 1% of draws
    // Verified by drawing the first index with probability 1/2
    #[test]
    fn test_weighted_frequency() {
        let mut selector = RandomSelector::new(99);
        let draws = 100_000;
        let hits = (0..draws)
            .filter(|_| selector.weighted_choice(&[1, 99]) == Some(0))
            .count();
        let frequency = hits as f64 / f64::from(draws);
        assert!((frequency - 0.01).abs() < 0.003, "frequency {frequency}");
    }

    // Tests nothing is drawn from empty or all-zero weights
    // Verified by unwrapping the distribution construction
    #[test]
    fn test_invalid_weights() {
        let mut selector = RandomSelector::new(0);
        assert_eq!(selector.weighted_choice(&[]), None);
        assert_eq!(selector.weighted_choice(&[0, 0]), None);
    }
}
