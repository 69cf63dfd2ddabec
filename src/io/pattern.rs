//! JSON pattern files: a tile catalog plus the example matrix it describes

use crate::analysis::patterns::ExamplePattern;
use crate::io::configuration::LABYRINTH_EXAMPLE;
use crate::io::error::{AlgorithmError, Result, WithContext};
use crate::io::image::ensure_parent_dir;
use crate::spatial::tiles::TileCatalog;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Example rows as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleRows {
    /// One string per row, every character is a symbol (`["LSLS", ...]`)
    Compact(Vec<String>),
    /// One list of symbols per row, for multi-character symbols
    Cells(Vec<Vec<String>>),
}

impl ExampleRows {
    /// Intern the rows into an example pattern
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the rows are empty or ragged
    pub fn to_pattern(&self) -> Result<ExamplePattern> {
        match self {
            Self::Compact(rows) => ExamplePattern::from_char_rows(rows),
            Self::Cells(rows) => ExamplePattern::from_rows(rows),
        }
    }
}

/// Serialized generation input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFile {
    /// Presentation of every symbol, keyed by symbol
    pub tiles: TileCatalog,
    /// Example matrix the rules are learned from
    pub example: ExampleRows,
}

impl PatternFile {
    /// The built-in labyrinth
    pub fn labyrinth() -> Self {
        Self {
            tiles: TileCatalog::labyrinth(),
            example: ExampleRows::Compact(LABYRINTH_EXAMPLE.map(String::from).into()),
        }
    }

    /// Read and validate a pattern file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not a valid pattern file
    /// - The example is empty or ragged, or uses a symbol the catalog lacks
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "read pattern file",
            source: e,
        })?;

        let pattern: Self = serde_json::from_str(&content).with_path(path)?;
        pattern.validate()?;
        Ok(pattern)
    }

    /// Write the pattern as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).with_path(path)?;
        ensure_parent_dir(path)?;
        std::fs::write(path, content).map_err(|e| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "write pattern file",
            source: e,
        })
    }

    /// Check that the example is rectangular and fully cataloged
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` or `UnknownTile`
    pub fn validate(&self) -> Result<()> {
        let example = self.example.to_pattern()?;
        self.tiles.resolve(example.alphabet())?;
        Ok(())
    }

    /// Split into the interned example and the catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the example is empty or ragged
    pub fn into_parts(self) -> Result<(ExamplePattern, TileCatalog)> {
        let example = self.example.to_pattern()?;
        Ok((example, self.tiles))
    }
}
