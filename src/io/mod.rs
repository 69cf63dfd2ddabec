//! Input/output: configuration, errors, pattern files and generated artifacts

/// Command-line interface and batch processing
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG export of the grid
pub mod image;
/// JSON pattern files
pub mod pattern;
/// Terminal progress bars
pub mod progress;
/// JSON layout summaries
pub mod summary;
/// Animated collapse-order capture
pub mod visualization;
