/// Shannon entropy (natural log) of the distribution implied by `weights`
///
/// Weights are normalized by their sum first, so raw occurrence counts can be
/// passed directly. Zero weights contribute nothing; an empty or all-zero input
/// and a single positive weight both have entropy 0.
pub fn shannon_entropy(weights: impl IntoIterator<Item = f64>) -> f64 {
    let weights: Vec<f64> = weights.into_iter().filter(|&w| w > 0.0).collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let entropy = -weights
        .iter()
        .map(|&w| {
            let p = w / total;
            p * p.ln()
        })
        .sum::<f64>();

    // Rounding can leave a tiny negative value for near-degenerate inputs
    entropy.max(0.0)
}
