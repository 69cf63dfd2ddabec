//! Mathematical utilities for the algorithm

/// Shannon entropy of weighted distributions
pub mod entropy;
/// Seeded weighted sampling
pub mod probability;
