//! Spatial data structures for the output grid
//!
//! This module contains spatial-related functionality including:
//! - Directions and neighbor bounds checks
//! - The superposition grid of candidate tiles
//! - Tile symbols and the tile catalog
//! - The materialized output layout

/// Orthogonal directions and neighbor lookup
pub mod direction;
/// Superposition grid state
pub mod grid;
/// Materialized wall and open entities
pub mod layout;
/// Tile symbols, ids and catalog
pub mod tiles;

pub use direction::{Direction, is_pos_valid};
pub use grid::SuperpositionGrid;
pub use layout::Layout;
