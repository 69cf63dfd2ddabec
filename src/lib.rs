//! Step-driven simple tiled wave function collapse for grid level layouts
//!
//! Adjacency rules and tile weights are learned from a small hand-authored
//! example matrix. A superposition grid of any size is then collapsed one
//! minimum-entropy cell per step, each decision propagated to the neighbors,
//! and every decided cell is materialized as a wall or open tile.

#![forbid(unsafe_code)]

/// Candidate sets, selection, collapse, propagation and the step-driven engine
pub mod algorithm;
/// Example patterns, rule extraction and tile weights
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Entropy and seeded weighted sampling
pub mod math;
/// Directions, the superposition grid, tiles and the materialized layout
pub mod spatial;

pub use algorithm::executor::{GenerationConfig, StepOutcome, WaveFunctionCollapse};
pub use io::error::{AlgorithmError, Result};
