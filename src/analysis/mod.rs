//! Analysis of the example pattern before generation starts

/// Example pattern loading and symbol interning
pub mod patterns;
/// Adjacency rule extraction
pub mod rules;
/// Tile frequency weights
pub mod weights;
