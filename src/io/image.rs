//! PNG export of the superposition grid with one colored block per cell

use crate::io::configuration::{MAX_CELL_PIXELS, PLACEHOLDER_COLOR};
use crate::io::error::{AlgorithmError, Result, invalid_parameter, invalid_source};
use crate::spatial::SuperpositionGrid;
use crate::spatial::tiles::TileSpec;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Export colors of every tile, indexed by tile id
pub fn tile_colors(specs: &[TileSpec]) -> Vec<[u8; 4]> {
    specs.iter().map(TileSpec::display_color).collect()
}

/// Reject cell sizes that would produce empty or oversized images
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_pixels` is 0 or above `MAX_CELL_PIXELS`
pub fn validate_cell_pixels(cell_pixels: u32) -> Result<()> {
    if cell_pixels == 0 || cell_pixels > MAX_CELL_PIXELS {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &format!("must be between 1 and {MAX_CELL_PIXELS}"),
        ));
    }
    Ok(())
}

/// Paint the square block of one grid cell
pub(crate) fn fill_cell(
    img: &mut RgbaImage,
    row: usize,
    col: usize,
    cell_pixels: u32,
    color: [u8; 4],
) {
    let x0 = col as u32 * cell_pixels;
    let y0 = row as u32 * cell_pixels;
    for dy in 0..cell_pixels {
        for dx in 0..cell_pixels {
            if let Some(pixel) = img.get_pixel_mut_checked(x0 + dx, y0 + dy) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Create parent directories of an output path
pub(crate) fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Render the grid: collapsed cells in their tile color, the rest as placeholders
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is out of range
/// - A collapsed tile has no entry in `colors`
pub fn render_grid(
    grid: &SuperpositionGrid,
    colors: &[[u8; 4]],
    cell_pixels: u32,
) -> Result<RgbaImage> {
    validate_cell_pixels(cell_pixels)?;

    let width = grid.cols() as u32 * cell_pixels;
    let height = grid.rows() as u32 * cell_pixels;
    let mut img = RgbaImage::new(width, height);

    for pos in grid.positions() {
        let color = match grid.tile_at(pos) {
            Some(tile) => colors.get(tile).copied().ok_or_else(|| {
                invalid_source(&format!(
                    "Tile {tile} is out of bounds for {} colors",
                    colors.len()
                ))
            })?,
            None => PLACEHOLDER_COLOR,
        };
        fill_cell(&mut img, pos[0], pos[1], cell_pixels, color);
    }

    Ok(img)
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - No cell has been collapsed yet
/// - Rendering fails (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &SuperpositionGrid,
    colors: &[[u8; 4]],
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    if grid.collapsed_count() == 0 {
        return Err(invalid_source(&"No cells have been collapsed in the grid"));
    }

    let img = render_grid(grid, colors, cell_pixels)?;

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
