//! Error types for engine construction, generation and file output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Example pattern or pattern file content doesn't meet engine requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// A symbol used by the example has no entry in the tile catalog
    UnknownTile {
        /// The symbol missing from the catalog
        symbol: String,
    },

    /// A symbol of the candidate universe has no weight
    ///
    /// Treating it as zero would poison both sampling and entropy, so construction fails instead.
    MissingWeight {
        /// The symbol without a weight entry
        symbol: String,
    },

    /// Engine or CLI parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Propagation removed the last candidate of a cell
    Contradiction {
        /// Grid position (row, col) of the emptied cell
        position: [usize; 2],
        /// Generation step during which it happened
        iteration: usize,
    },

    /// Pattern file could not be parsed
    PatternParse {
        /// Path of the pattern file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to encode or save a generated image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::UnknownTile { symbol } => {
                write!(f, "Tile '{symbol}' appears in the example but not in the catalog")
            }
            Self::MissingWeight { symbol } => {
                write!(f, "Tile '{symbol}' has no weight entry")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Contradiction {
                position,
                iteration,
            } => {
                write!(
                    f,
                    "Contradiction at cell ({}, {}) during step {iteration}: no candidates left",
                    position[0], position[1]
                )
            }
            Self::PatternParse { path, source } => {
                write!(
                    f,
                    "Failed to parse pattern file '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PatternParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for AlgorithmError {
    fn from(err: serde_json::Error) -> Self {
        Self::PatternParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl AlgorithmError {
    /// Whether a retry with a different seed could succeed
    pub const fn is_contradiction(&self) -> bool {
        matches!(self, Self::Contradiction { .. })
    }
}

/// Enriches error messages with generation state information
pub trait WithContext<T> {
    /// Stamp the generation step on errors that carry one
    ///
    /// # Errors
    ///
    /// Propagates the original error with the step applied
    fn with_iteration(self, iteration: usize) -> Result<T>;

    /// Attach the file path to errors raised without one
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &std::path::Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_iteration(self, iteration: usize) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only contradictions know which step they belong to
            if let AlgorithmError::Contradiction { iteration: step, .. } = &mut error {
                *step = iteration;
            }
            error
        })
    }

    fn with_path(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                AlgorithmError::PatternParse { path: p, .. }
                | AlgorithmError::ImageExport { path: p, .. }
                | AlgorithmError::FileSystem { path: p, .. } => *p = path.to_path_buf(),
                _ => {}
            }
            error
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
