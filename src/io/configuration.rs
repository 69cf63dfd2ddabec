//! Generation constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// 1200x800 window with 50 px cells, three rows reserved for the HUD
/// Default output grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 24;
/// Default output grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 13;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default edge length of one cell in exported images
pub const DEFAULT_CELL_PIXELS: u32 = 8;
/// Largest accepted cell edge length in exported images
pub const MAX_CELL_PIXELS: u32 = 64;

/// Extra seeds tried after a contradiction before giving up on a pattern file
pub const DEFAULT_RETRIES: u32 = 5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to generated layout images
pub const OUTPUT_SUFFIX: &str = "_layout";
/// Suffix added to generated layout summaries
pub const SUMMARY_SUFFIX: &str = "_layout";
/// Suffix added to collapse-order animations
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

/// Asset shown for cells that are still in superposition
pub const PLACEHOLDER_ASSET: &str = "explosion_0.png";

/// Fill color for cells that are still in superposition
pub const PLACEHOLDER_COLOR: [u8; 4] = [72, 44, 60, 255];
/// Fallback color for wall tiles without an explicit color
pub const WALL_COLOR: [u8; 4] = [40, 40, 48, 255];
/// Fallback color for open tiles without an explicit color
pub const OPEN_COLOR: [u8; 4] = [214, 200, 170, 255];

/// Built-in labyrinth example, one symbol per character
pub const LABYRINTH_EXAMPLE: [&str; 7] = [
    "LSLS", //
    "SLLL", //
    "LSSS", //
    "SSCS", //
    "LSCS", //
    "SSSS", //
    "LSSS",
];

/// Catalog of the built-in labyrinth as (symbol, asset, is wall)
pub const LABYRINTH_TILES: [(&str, &str, bool); 3] = [
    ("L", "wall_3.png", true),
    ("S", "space_6.png", false),
    ("C", "space_5.png", false),
];
