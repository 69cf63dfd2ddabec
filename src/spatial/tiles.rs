//! Tile symbols, their interned ids and the caller-supplied tile catalog

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::io::configuration::{LABYRINTH_TILES, OPEN_COLOR, WALL_COLOR};
use crate::io::error::{AlgorithmError, Result};

/// Dense index of a tile symbol inside one generation run
pub type TileId = usize;

/// Interns tile symbols to dense ids in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileAlphabet {
    symbols: Vec<String>,
    ids: HashMap<String, TileId>,
}

impl TileAlphabet {
    /// Create an empty alphabet
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of a symbol, assigning the next free id on first sight
    pub fn intern(&mut self, symbol: &str) -> TileId {
        if let Some(&id) = self.ids.get(symbol) {
            return id;
        }
        let id = self.symbols.len();
        self.symbols.push(symbol.to_string());
        self.ids.insert(symbol.to_string(), id);
        id
    }

    /// Look up the id of a known symbol
    pub fn id(&self, symbol: &str) -> Option<TileId> {
        self.ids.get(symbol).copied()
    }

    /// Look up the symbol of an id
    pub fn symbol(&self, id: TileId) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbol has been interned
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate symbols in id order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

/// Whether a materialized tile blocks movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Blocking tile, handed to the obstacle system
    Wall,
    /// Walkable tile, rendered only
    Open,
}

/// How one tile symbol is presented once collapsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpec {
    /// Asset reference used by the renderer
    pub asset: String,
    /// Whether the tile blocks movement
    pub wall: bool,
    /// Optional RGBA color used by image exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 4]>,
}

impl TileSpec {
    /// Create a spec without an explicit color
    pub fn new(asset: &str, wall: bool) -> Self {
        Self {
            asset: asset.to_string(),
            wall,
            color: None,
        }
    }

    /// Classification of the tile
    pub const fn kind(&self) -> TileKind {
        if self.wall {
            TileKind::Wall
        } else {
            TileKind::Open
        }
    }

    /// Export color, falling back to the wall/open default
    pub fn display_color(&self) -> [u8; 4] {
        self.color.unwrap_or(if self.wall { WALL_COLOR } else { OPEN_COLOR })
    }
}

/// Mapping from tile symbol to its presentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileCatalog {
    tiles: BTreeMap<String, TileSpec>,
}

impl TileCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the built-in labyrinth example
    pub fn labyrinth() -> Self {
        LABYRINTH_TILES
            .iter()
            .map(|&(symbol, asset, wall)| (symbol.to_string(), TileSpec::new(asset, wall)))
            .collect()
    }

    /// Add or replace the spec of a symbol
    pub fn insert(&mut self, symbol: &str, spec: TileSpec) {
        self.tiles.insert(symbol.to_string(), spec);
    }

    /// Look up the spec of a symbol
    pub fn get(&self, symbol: &str) -> Option<&TileSpec> {
        self.tiles.get(symbol)
    }

    /// Number of cataloged symbols
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Resolve the spec of every alphabet symbol, indexed by `TileId`
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` for the first symbol without a catalog entry
    pub fn resolve(&self, alphabet: &TileAlphabet) -> Result<Vec<TileSpec>> {
        alphabet
            .symbols()
            .map(|symbol| {
                self.get(symbol)
                    .cloned()
                    .ok_or_else(|| AlgorithmError::UnknownTile {
                        symbol: symbol.to_string(),
                    })
            })
            .collect()
    }
}

impl FromIterator<(String, TileSpec)> for TileCatalog {
    fn from_iter<I: IntoIterator<Item = (String, TileSpec)>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
