//! Core wave function collapse components
//!
//! Candidate sets, entropy-driven cell selection, weighted collapse,
//! constraint propagation and the step-driven engine tying them together.

/// Compact candidate sets over tile ids
pub mod bitset;
/// Weighted collapse of single cells
pub mod collapse;
/// Step-driven generation engine
pub mod executor;
/// Constraint propagation over the superposition grid
pub mod propagation;
/// Minimum-entropy cell selection
pub mod selection;
